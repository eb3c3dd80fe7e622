use crate::engine::MovieQueries;
use ahash::HashSet;
use std::time::Instant;
use tracing::debug;

impl<'a> MovieQueries<'a> {
    /// Actors whose name also appears as a character name in some movie of
    /// the collection (not necessarily one they acted in).
    pub fn self_portraying_actors(&self) -> HashSet<&'a str> {
        let start = Instant::now();

        let actors: HashSet<&'a str> = self
            .movies()
            .iter()
            .flat_map(|movie| movie.actors().iter().map(String::as_str))
            .collect();

        let res: HashSet<&'a str> = actors
            .into_iter()
            .filter(|actor| {
                self.movies()
                    .iter()
                    .any(|movie| movie.characters().contains(*actor))
            })
            .collect();

        debug!(
            query = "self_portraying_actors",
            results = res.len(),
            elapsed = start.elapsed().as_secs_f32(),
            "query finished"
        );

        res
    }
}
