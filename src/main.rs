use anyhow::Context;
use clap::{Parser, Subcommand};
use movie_queries::MovieData;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "movie-queries", about = "Ad-hoc queries over a movie catalogue")]
struct Cli {
    /// Parquet file holding the movie table
    #[arg(long, env = "MOVIES_PATH", default_value = "movies.parquet")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Actors who share a name with some character
    SelfPortraying,
    /// Actors in any movie of a director, alphabetically
    DirectorCast { director: String },
    /// Movies where someone who directs also acts, most recent first
    DirectorActors,
    /// Movies of a year grouped by category
    ByYear { year: i32 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = MovieData::from_parquet(&cli.data)
        .with_context(|| format!("loading movies from {}", cli.data.display()))?;
    let queries = db.queries();

    match cli.command {
        Command::SelfPortraying => {
            let mut actors: Vec<&str> = queries.self_portraying_actors().into_iter().collect();
            actors.sort_unstable();
            for actor in actors {
                println!("{actor}");
            }
        }
        Command::DirectorCast { director } => {
            for actor in queries.actors_in_directors_movies_alphabetical(&director) {
                println!("{actor}");
            }
        }
        Command::DirectorActors => {
            for movie in queries.movies_where_a_director_acted_most_recent_first() {
                println!("{movie}");
            }
        }
        Command::ByYear { year } => {
            let mut groups: Vec<_> = queries
                .movies_by_year_grouped_by_category(year)
                .into_iter()
                .collect();
            groups.sort_unstable_by_key(|(category, _)| *category);
            for (category, bucket) in groups {
                let mut titles: Vec<&str> = bucket.iter().map(|m| m.title()).collect();
                titles.sort_unstable();
                println!("{category}: {}", titles.join(", "));
            }
        }
    }

    Ok(())
}
