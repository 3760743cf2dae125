use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::SearchFilter;
use providers::{CachedMetadataProvider, IndexedCatalog, IndexedMetadata};
use records::{CatalogIndex, Movie};
use server::{MovieSearchEngine, SearchConfig, SearchResult};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// movie-search - merged movie metadata lookup and field search
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Look up and search movies merged from catalog and metadata providers", long_about = None)]
struct Cli {
    /// Directory containing catalog.json and metadata.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Metadata lookups in flight while listing the catalog
    #[arg(long, default_value = "1")]
    concurrency: usize,

    /// Expire cached metadata records after this many seconds
    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    /// Print raw JSON instead of a summary
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get one merged movie by catalog id or IMDb id
    Get {
        /// Catalog id (e.g. 3532674) or IMDb id (e.g. tt0401792)
        #[arg(long)]
        id: String,
    },

    /// Search merged movies by field
    Search {
        /// TERM=VALUE pair; TERM is a case-insensitive field path prefix,
        /// VALUE must equal the field value ignoring case. Repeat to AND terms.
        #[arg(short, long = "filter", value_parser = parse_filter_term)]
        filters: Vec<(String, String)>,
    },

    /// Run benchmark to test lookup performance
    Benchmark {
        /// Number of lookups to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent lookups
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("Loading provider snapshots from {}", cli.data_dir.display());

    let start = Instant::now();
    let (catalog_index, metadata_index) = records::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load provider snapshots from {}", cli.data_dir.display()))?;
    let catalog_index = Arc::new(catalog_index);
    if !cli.json {
        println!(
            "{} Loaded {} catalog and {} metadata records in {:?}",
            "✓".green(),
            catalog_index.len(),
            metadata_index.len(),
            start.elapsed()
        );
    }

    let engine = build_engine(&cli, catalog_index.clone(), metadata_index);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Get { id } => handle_get(&engine, &id, cli.json).await?,
        Commands::Search { filters } => handle_search(&engine, filters, cli.json).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(engine, catalog_index, requests, concurrent).await?,
    }

    Ok(())
}

/// Wire the local providers into a search engine
fn build_engine(
    cli: &Cli,
    catalog_index: Arc<CatalogIndex>,
    metadata_index: records::MetadataIndex,
) -> MovieSearchEngine {
    debug!(
        concurrency = cli.concurrency,
        cache_ttl_secs = ?cli.cache_ttl_secs,
        "Building search engine"
    );
    let catalog = IndexedCatalog::new(catalog_index);

    let mut metadata = CachedMetadataProvider::new(IndexedMetadata::new(Arc::new(metadata_index)));
    if let Some(ttl) = cli.cache_ttl_secs {
        metadata = metadata.with_ttl(Duration::from_secs(ttl));
    }

    MovieSearchEngine::new(Arc::new(catalog), Arc::new(metadata))
        .with_config(SearchConfig::default().with_metadata_concurrency(cli.concurrency))
}

/// Parse a `TERM=VALUE` search argument
fn parse_filter_term(s: &str) -> std::result::Result<(String, String), String> {
    let (term, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid TERM=VALUE: no `=` found in `{}`", s))?;

    let term = term.trim();
    if term.is_empty() {
        return Err(format!("invalid TERM=VALUE: empty term in `{}`", s));
    }
    Ok((term.to_string(), value.to_string()))
}

/// Handle the 'get' command
async fn handle_get(engine: &MovieSearchEngine, id: &str, json: bool) -> Result<()> {
    let movie = engine
        .get_movie_by_id(id)
        .await?
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&movie)?);
    } else {
        print_movie(&movie);
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    engine: &MovieSearchEngine,
    filters: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    let filter: SearchFilter = filters.into_iter().collect();
    let result = engine.get_movies_by_search(&filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_search_result(&filter, &result);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    engine: MovieSearchEngine,
    catalog_index: Arc<CatalogIndex>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if catalog_index.is_empty() || requests == 0 {
        return Err(anyhow!("Benchmark needs a non-empty catalog and at least one request"));
    }

    // Pick random catalog movies, alternating native and canonical ids
    let ids: Vec<String> = (0..requests)
        .map(|i| {
            let movie = &catalog_index.movies()[rand::random::<u32>() as usize % catalog_index.len()];
            if i % 2 == 0 {
                movie.id.to_string()
            } else {
                movie.imdb_id.clone()
            }
        })
        .collect();

    // Use tokio::spawn to make concurrent requests, bounded by a semaphore
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for id in ids {
        let engine = engine.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            engine.get_movie_by_id(&id).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Print one merged movie
fn print_movie(movie: &Movie) {
    println!(
        "{}",
        format!("{} ({})", movie.title, movie.production_year).bold().blue()
    );
    println!("{}Ids: {} / {}", "• ".green(), movie.id, movie.imdb_id);
    println!("{}Runtime: {}", "• ".green(), movie.runtime);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Director: {}", "• ".green(), movie.director.join(", "));
    println!("{}Actors: {}", "• ".green(), movie.actors.join(", "));
    println!("{}Languages: {}", "• ".green(), movie.languages.join(", "));
    for rating in &movie.ratings {
        println!("{}{}: {}", "• ".cyan(), rating.source, rating.value);
    }
    if !movie.description.is_empty() {
        println!("  {}", movie.description);
    }
}

/// Print a search result, flagging the zero-match fallback
fn print_search_result(filter: &SearchFilter, result: &SearchResult) {
    match result.matches {
        None => println!("{}", "All movies (no filter):".bold().blue()),
        Some(0) => println!(
            "{} {}",
            format!("No movies matched '{}'.", filter).yellow(),
            "Showing all movies:".bold()
        ),
        Some(count) => println!(
            "{}",
            format!("{} movies matched '{}':", count, filter).bold().blue()
        ),
    }

    for (rank, movie) in result.movies.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.production_year,
            movie.imdb_id,
            movie.director.join(", ")
        );
    }
}
