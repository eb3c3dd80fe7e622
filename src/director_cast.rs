use crate::engine::MovieQueries;
use ahash::HashSet;
use std::time::Instant;
use tracing::debug;

impl<'a> MovieQueries<'a> {
    /// Every actor who appears in at least one movie directed by `director`,
    /// deduplicated and sorted ascending. Matching is exact and case-sensitive.
    pub fn actors_in_directors_movies_alphabetical(&self, director: &str) -> Vec<&'a str> {
        let start = Instant::now();

        let actors: HashSet<&'a str> = self
            .movies()
            .iter()
            .filter(|movie| movie.directors().contains(director))
            .flat_map(|movie| movie.actors().iter().map(String::as_str))
            .collect();

        let mut res: Vec<&'a str> = actors.into_iter().collect();
        res.sort_unstable();

        debug!(
            query = "actors_in_directors_movies_alphabetical",
            director,
            results = res.len(),
            elapsed = start.elapsed().as_secs_f32(),
            "query finished"
        );

        res
    }
}
