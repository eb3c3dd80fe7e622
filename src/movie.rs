use ahash::HashSet;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One film: title, release year, cast, directors, on-screen characters and
/// categories. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    release_year: i32,
    actors: HashSet<String>,
    directors: HashSet<String>,
    characters: HashSet<String>,
    categories: HashSet<String>,
}

fn to_set<I, S>(items: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl Movie {
    pub fn new<A, D, C, G>(
        title: impl Into<String>,
        release_year: i32,
        actors: A,
        directors: D,
        characters: C,
        categories: G,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Movie {
            title: title.into(),
            release_year,
            actors: to_set(actors),
            directors: to_set(directors),
            characters: to_set(characters),
            categories: to_set(categories),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn actors(&self) -> &HashSet<String> {
        &self.actors
    }

    pub fn directors(&self) -> &HashSet<String> {
        &self.directors
    }

    pub fn characters(&self) -> &HashSet<String> {
        &self.characters
    }

    pub fn categories(&self) -> &HashSet<String> {
        &self.categories
    }
}

// Set iteration order is arbitrary, so elements are hashed with a fixed-seed
// hasher and combined with a commutative sum.
fn hash_set_unordered<H: Hasher>(set: &HashSet<String>, state: &mut H) {
    let sum = set.iter().fold(0u64, |acc, item| {
        let mut hasher = FxHasher::default();
        item.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    });
    set.len().hash(state);
    sum.hash(state);
}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.release_year.hash(state);
        hash_set_unordered(&self.actors, state);
        hash_set_unordered(&self.directors, state);
        hash_set_unordered(&self.characters, state);
        hash_set_unordered(&self.categories, state);
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}
