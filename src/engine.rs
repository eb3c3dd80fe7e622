use crate::movie::Movie;

/// Read-only query facade over a borrowed collection of movies.
///
/// The collection is treated as a bag: query results never depend on its order
/// except where ties must be broken deterministically. Every query borrows
/// from the collection, so results live as long as the movies do.
#[derive(Debug, Clone, Copy)]
pub struct MovieQueries<'a> {
    movies: &'a [Movie],
}

impl<'a> MovieQueries<'a> {
    pub fn new(movies: &'a [Movie]) -> Self {
        MovieQueries { movies }
    }

    pub fn movies(&self) -> &'a [Movie] {
        self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
