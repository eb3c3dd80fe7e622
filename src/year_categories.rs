use crate::engine::MovieQueries;
use crate::movie::Movie;
use ahash::{HashMap, HashSet};
use std::time::Instant;
use tracing::debug;

impl<'a> MovieQueries<'a> {
    /// Movies released in `year`, bucketed by each of their categories.
    /// Only categories with at least one such movie get a bucket.
    pub fn movies_by_year_grouped_by_category(
        &self,
        year: i32,
    ) -> HashMap<&'a str, HashSet<&'a Movie>> {
        let start = Instant::now();

        let mut res: HashMap<&'a str, HashSet<&'a Movie>> = HashMap::default();

        for movie in self.movies().iter().filter(|m| m.release_year() == year) {
            for category in movie.categories() {
                res.entry(category.as_str()).or_default().insert(movie);
            }
        }

        debug!(
            query = "movies_by_year_grouped_by_category",
            year,
            categories = res.len(),
            elapsed = start.elapsed().as_secs_f32(),
            "query finished"
        );

        res
    }
}
