use std::process::ExitCode;
use std::time::Duration;
use awardscout_client::{render::render, Action, HttpSearchApi, SearchApi, SearchController};
use awardscout_core::SearchRequest;
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Compare award and cash pricing for flights.
#[derive(Debug, Parser)]
#[command(name = "awardscout", version)]
struct Args {
    /// Base URL of the AwardScout API.
    #[arg(long, env = "AWARDSCOUT_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the airports the API can search.
    Airports,
    /// Search flights and show award and cash pricing.
    Search(SearchArgs),
}

#[derive(Debug, ClapArgs)]
struct SearchArgs {
    #[arg(long, default_value = "LAX")]
    origin: String,

    #[arg(long, default_value = "JFK")]
    destination: String,

    /// Departure date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=8))]
    passengers: u8,

    /// Exchange origin and destination before searching.
    #[arg(long)]
    swap: bool,

    /// Print the raw search result as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "awardscout=info,awardscout_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let api = HttpSearchApi::new(&args.api_url, Duration::from_secs(args.timeout))?;

    match args.command {
        Command::Airports => {
            for airport in api.airports().await? {
                println!("{}", airport.label());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Search(search) => run_search(api, search).await,
    }
}

async fn run_search(api: HttpSearchApi, args: SearchArgs) -> anyhow::Result<ExitCode> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let form = SearchRequest::new(&args.origin, &args.destination, date, args.passengers.into());

    let mut controller = SearchController::new(api, form);
    controller.load_airports().await;
    if args.swap {
        controller.dispatch(Action::SwapAirports);
    }

    let state = controller.submit().await?;

    match (args.json, state.results()) {
        (true, Some(result)) => println!("{}", serde_json::to_string_pretty(result)?),
        _ => print!("{}", render(state)),
    }

    Ok(if state.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
