pub mod data;
pub mod engine;
pub mod error;
pub mod movie;

mod acting_directors;
mod director_cast;
mod self_portrayal;
mod year_categories;

pub use data::MovieData;
pub use engine::MovieQueries;
pub use error::LoadError;
pub use movie::Movie;
