use crate::engine::MovieQueries;
use crate::error::LoadError;
use crate::movie::Movie;
use polars::prelude::{DataFrame, ParquetReader, SerReader, Series};
use std::fs::File;
use std::path::Path;
use tracing::info;

pub const TITLE: &str = "title";
pub const RELEASE_YEAR: &str = "release_year";
pub const ACTORS: &str = "actors";
pub const DIRECTORS: &str = "directors";
pub const CHARACTERS: &str = "characters";
pub const CATEGORIES: &str = "categories";

// Layout of the movie table:
//     title         str        NOT NULL
//     release_year  i32        NOT NULL
//     actors        list[str]  NOT NULL, no null elements
//     directors     list[str]  NOT NULL, no null elements
//     characters    list[str]  NOT NULL, no null elements
//     categories    list[str]  NOT NULL, no null elements

/// An owned, validated movie collection. Any null in the source rejects the
/// whole load rather than producing a partial collection.
#[derive(Debug, Clone, Default)]
pub struct MovieData {
    movies: Vec<Movie>,
}

fn names(
    list: Option<Series>,
    column: &'static str,
    row: usize,
) -> Result<Vec<String>, LoadError> {
    let series = list.ok_or(LoadError::NullValue { column, row })?;
    series
        .str()?
        .into_iter()
        .map(|name| {
            name.map(str::to_string)
                .ok_or(LoadError::NullValue { column, row })
        })
        .collect()
}

impl MovieData {
    pub fn from_parquet(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let df = ParquetReader::new(file).finish()?;
        let data = Self::from_frame(&df)?;

        info!(path = %path.display(), movies = data.movies.len(), "loaded movies");

        Ok(data)
    }

    pub fn from_frame(df: &DataFrame) -> Result<Self, LoadError> {
        let title = df.column(TITLE)?.str()?;
        let release_year = df.column(RELEASE_YEAR)?.i32()?;
        let actors = df.column(ACTORS)?.as_materialized_series().list()?;
        let directors = df.column(DIRECTORS)?.as_materialized_series().list()?;
        let characters = df.column(CHARACTERS)?.as_materialized_series().list()?;
        let categories = df.column(CATEGORIES)?.as_materialized_series().list()?;

        let mut movies = Vec::with_capacity(df.height());

        for (row, (((((title, year), actors), directors), characters), categories)) in title
            .into_iter()
            .zip(release_year)
            .zip(actors)
            .zip(directors)
            .zip(characters)
            .zip(categories)
            .enumerate()
        {
            let title = title.ok_or(LoadError::NullValue { column: TITLE, row })?;
            let year = year.ok_or(LoadError::NullValue {
                column: RELEASE_YEAR,
                row,
            })?;

            movies.push(Movie::new(
                title,
                year,
                names(actors, ACTORS, row)?,
                names(directors, DIRECTORS, row)?,
                names(characters, CHARACTERS, row)?,
                names(categories, CATEGORIES, row)?,
            ));
        }

        Ok(MovieData { movies })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn queries(&self) -> MovieQueries<'_> {
        MovieQueries::new(&self.movies)
    }
}

impl From<Vec<Movie>> for MovieData {
    fn from(movies: Vec<Movie>) -> Self {
        MovieData { movies }
    }
}
