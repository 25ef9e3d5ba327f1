use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;

mod aggregator;
mod cache;
mod config;
mod error;
mod presets;
mod source;
mod suggestion;

use aggregator::SuggestionAggregator;
use source::{HotelSearchClient, HotelSource, NoopSource, PlacesClient, PlacesSource};
use suggestion::LocationSuggestion;

/// Location autocomplete for the Pick Me Hop booking flow
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Location autocomplete for the Pick Me Hop booking flow"
)]
struct Args {
    /// Look up a single query and exit (reads lines from stdin otherwise)
    query: Option<String>,

    /// Disable the remote sources; answer from presets only
    #[arg(long)]
    offline: bool,

    /// Print suggestions as a JSON array
    #[arg(long)]
    json: bool,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {warning}");
    }
    let config = config_result.config;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if args.offline {
        return rt.block_on(run(SuggestionAggregator::new(NoopSource, NoopSource), args));
    }

    let timeout = Duration::from_secs(config.remote.timeout_secs);
    let hotels = HotelSearchClient::from_config(&config.hotels, timeout);
    let places = PlacesClient::from_config(&config.places, timeout);

    match (hotels, places) {
        (Ok(hotels), Ok(places)) => {
            rt.block_on(run(SuggestionAggregator::new(hotels, places), args))
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("warning: {e}; continuing with presets only");
            rt.block_on(run(SuggestionAggregator::new(NoopSource, NoopSource), args))
        }
    }
}

async fn run<H: HotelSource, P: PlacesSource>(
    mut aggregator: SuggestionAggregator<H, P>,
    args: Args,
) -> Result<()> {
    if let Some(query) = &args.query {
        let suggestions = aggregator.suggest(query).await;
        print_suggestions(&suggestions, args.json)?;
        return Ok(());
    }

    interactive_loop(&mut aggregator, args.json).await
}

/// Line-oriented loop: each line is a settled query, `:clear` drops the
/// cache, `:quit` exits
async fn interactive_loop<H: HotelSource, P: PlacesSource>(
    aggregator: &mut SuggestionAggregator<H, P>,
    json: bool,
) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim();

        match query {
            ":quit" | ":q" => break,
            ":clear" => {
                aggregator.invalidate();
                println!("cache cleared");
            }
            _ => {
                let suggestions = aggregator.suggest(query).await;
                print_suggestions(&suggestions, json)?;
            }
        }
    }

    Ok(())
}

fn print_suggestions(suggestions: &[LocationSuggestion], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("no suggestions");
        return Ok(());
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion.display_line());
    }

    Ok(())
}
