use crate::engine::MovieQueries;
use crate::movie::Movie;
use ahash::HashSet;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::time::Instant;
use tracing::debug;

impl<'a> MovieQueries<'a> {
    /// Movies with at least one actor who directs some movie of the collection,
    /// most recent first. Structurally equal movies are reported once, and
    /// movies from the same year keep their collection order.
    pub fn movies_where_a_director_acted_most_recent_first(&self) -> Vec<&'a Movie> {
        let start = Instant::now();

        let directors: FxHashSet<&'a str> = self
            .movies()
            .iter()
            .flat_map(|movie| movie.directors().iter().map(String::as_str))
            .collect();

        let mut seen: HashSet<&'a Movie> = HashSet::default();
        let mut res: Vec<&'a Movie> = self
            .movies()
            .iter()
            .filter(|movie| {
                movie
                    .actors()
                    .iter()
                    .any(|actor| directors.contains(actor.as_str()))
            })
            .filter(|movie| seen.insert(*movie))
            .collect();

        // stable: equal years stay in collection order
        res.sort_by_key(|movie| Reverse(movie.release_year()));

        debug!(
            query = "movies_where_a_director_acted_most_recent_first",
            directors = directors.len(),
            results = res.len(),
            elapsed = start.elapsed().as_secs_f32(),
            "query finished"
        );

        res
    }
}

#[cfg(test)]
mod test_acting_directors {
    use super::*;
    use crate::engine::fixtures;

    fn titles<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
        movies.iter().map(|&m| m.title()).collect()
    }

    #[test]
    fn test_scenario() {
        let movies = fixtures::scenario();
        let res = MovieQueries::new(&movies).movies_where_a_director_acted_most_recent_first();

        assert_eq!(res, vec![&movies[0]]);
    }

    #[test]
    fn test_catalogue() {
        let movies = fixtures::catalogue();
        let res = MovieQueries::new(&movies).movies_where_a_director_acted_most_recent_first();

        assert_eq!(
            titles(&res),
            vec!["Gran Torino", "Million Dollar Baby", "Adaptation"]
        );
    }

    #[test]
    fn test_director_of_another_movie_qualifies() {
        let movies = vec![
            Movie::new("A", 2000, ["Dee"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("B", 2005, ["Ed"], ["Fay"], ["X"], ["Drama"]),
        ];
        let res = MovieQueries::new(&movies).movies_where_a_director_acted_most_recent_first();

        assert_eq!(titles(&res), vec!["B"]);
    }

    #[test]
    fn test_structural_duplicates_collapse() {
        let movies = vec![
            Movie::new("A", 2000, ["Ed", "Dee"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("A", 2000, ["Dee", "Ed"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("A", 2001, ["Ed"], ["Ed"], ["X"], ["Drama"]),
        ];
        let res = MovieQueries::new(&movies).movies_where_a_director_acted_most_recent_first();

        assert_eq!(res, vec![&movies[2], &movies[0]]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let movies = vec![
            Movie::new("C", 2000, ["Ed"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("A", 2010, ["Ed"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("B", 2000, ["Ed"], ["Ed"], ["X"], ["Drama"]),
            Movie::new("D", 2000, ["Ed"], ["Ed"], ["X"], ["Drama"]),
        ];
        let queries = MovieQueries::new(&movies);
        let res = queries.movies_where_a_director_acted_most_recent_first();

        assert_eq!(titles(&res), vec!["A", "C", "B", "D"]);
        assert_eq!(res, queries.movies_where_a_director_acted_most_recent_first());
    }

    #[test]
    fn test_no_acting_directors() {
        let movies = vec![Movie::new("A", 2000, ["Dee"], ["Ed"], ["X"], ["Drama"])];

        assert!(MovieQueries::new(&movies)
            .movies_where_a_director_acted_most_recent_first()
            .is_empty());
        assert!(MovieQueries::new(&[])
            .movies_where_a_director_acted_most_recent_first()
            .is_empty());
    }
}
