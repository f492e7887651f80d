//! Terminal front-end for the ranking-insight service.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use ranking_insight_sdk::series::{self, LabelMode, Selection};
use ranking_insight_sdk::view::{LoadFailure, LoadState};
use ranking_insight_sdk::views::{ChatTranscript, DashboardView, InsightsView, RankingTableView, ReportsView};
use ranking_insight_sdk::{config, ErrorKind, RankingClient, RankingError, SortKey};

#[derive(Parser)]
#[command(name = "ranking-cli", version, about = "Product ranking dashboard in the terminal")]
struct Cli {
    /// Service base URL (defaults to $RANKING_API_URL or http://localhost:8000).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the service is up.
    Health,
    /// Headline stats and aggregated rankings.
    Dashboard {
        #[arg(long, default_value_t = config::DEFAULT_DAYS)]
        days: u32,
    },
    /// Ranking table for the tracked brand.
    Rankings {
        #[arg(long, value_enum, default_value_t = SortArg::Avg)]
        sort: SortArg,
    },
    /// Daily rank series for selected products.
    Chart {
        /// Series key (product name with spaces as underscores); repeatable.
        #[arg(long = "product")]
        products: Vec<String>,
        #[arg(long, default_value_t = config::DEFAULT_DAYS)]
        days: u32,
    },
    /// Ask the assistant a question.
    Chat { message: String },
    /// List generated reports.
    Reports,
    /// Generate a new Excel report.
    GenerateReport {
        #[arg(long, default_value_t = config::DEFAULT_DAYS)]
        days: u32,
    },
    /// Download a report file.
    Download {
        filename: String,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Collect today's rankings and re-index the vector store.
    Sync,
    /// Performance and marketing insights.
    Insights,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Avg,
    Best,
    Change,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Avg => SortKey::Average,
            SortArg::Best => SortKey::Best,
            SortArg::Change => SortKey::Change,
            SortArg::Name => SortKey::Name,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}

enum CliError {
    Request(RankingError),
    View(LoadFailure),
}

impl CliError {
    fn kind(&self) -> ErrorKind {
        match self {
            CliError::Request(e) => e.kind(),
            CliError::View(f) => f.kind,
        }
    }
}

impl From<RankingError> for CliError {
    fn from(e: RankingError) -> Self {
        CliError::Request(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Request(e) => write!(f, "{}", e),
            CliError::View(failure) => f.write_str(&failure.message),
        }
    }
}

type CliResult<T> = std::result::Result<T, CliError>;

fn run(cli: Cli) -> CliResult<()> {
    let mut builder = RankingClient::builder();
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;
    let json = cli.json;

    match cli.command {
        Command::Health => {
            let health = client.health()?;
            if json {
                return print_json(&health);
            }
            println!("status: {} (initialized: {})", health.status, health.initialized);
        }
        Command::Dashboard { days } => {
            let mut view = DashboardView::new(days);
            view.refresh(&client);
            let data = ready(view.state())?;
            if json {
                return print_json(&serde_json::json!({
                    "stats": data.stats,
                    "counters": data.aggregation.counters,
                    "rankings": data.aggregation.rankings,
                }));
            }
            let s = &data.stats;
            println!(
                "products: {}  brand: {}  top5: {}  avg rank: {:.1}",
                s.total_products, s.laneige_products, s.top5_products, s.average_rank
            );
            let c = &data.aggregation.counters;
            println!("top10: {}  up: {}  down: {}\n", c.top10, c.up, c.down);
            for (rank, r) in data.aggregation.ranked() {
                println!(
                    "{:>3}. {:<40} {:<12} {}  avg {:>5.1}  best {:>3}  worst {:>3}  {:+}",
                    rank,
                    r.product_name,
                    r.category_label,
                    r.category_color(),
                    r.avg,
                    r.best,
                    r.worst,
                    r.change
                );
            }
        }
        Command::Rankings { sort } => {
            let mut view = RankingTableView::new();
            view.refresh(&client);
            view.sort_by(sort.into());
            let table = ready(view.state())?;
            if json {
                return print_json(&table.aggregation.rankings);
            }
            for (rank, r) in table.aggregation.ranked() {
                let id = r.product_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
                let badge = if r.top5 {
                    "TOP5"
                } else if r.top10 {
                    "TOP10"
                } else {
                    ""
                };
                println!(
                    "{:>3}. [{:>4}] {:<40} current {:>3}  avg {:>5.1}  {:+}  {}",
                    rank, id, r.product_name, r.current, r.avg, r.change, badge
                );
            }
        }
        Command::Chart { products, days } => {
            let points = client.rankings().chart_data(days)?;
            let selection: Selection = if products.is_empty() {
                series::available_keys(&points).into_iter().collect()
            } else {
                products.into_iter().collect()
            };
            let all = series::reconcile(&points, &selection, LabelMode::Sequential);
            if json {
                return print_json(&all);
            }
            for s in all {
                let ranks: Vec<String> = s
                    .points
                    .iter()
                    .map(|p| p.rank.map(|r| format!("{r:.0}")).unwrap_or_else(|| "-".into()))
                    .collect();
                let delta = series::first_last_delta(&points, &s.key)
                    .map(|d| format!("{d:+.0}"))
                    .unwrap_or_else(|| "n/a".into());
                println!("{} (delta {}): {}", s.key, delta, ranks.join(" "));
            }
        }
        Command::Chat { message } => {
            let mut transcript = ChatTranscript::new();
            let reply = transcript.ask(&client, &message)?;
            if json {
                return print_json(reply);
            }
            println!("{}", reply.text);
        }
        Command::Reports => {
            let mut view = ReportsView::new();
            view.refresh(&client);
            let reports = ready(view.state())?;
            if json {
                return print_json(reports);
            }
            for r in reports {
                println!("{:<48} {:>10} bytes  {}", r.filename, r.size, view.download_url(&client, r));
            }
        }
        Command::GenerateReport { days } => {
            let report = client.reports().generate(days)?;
            if json {
                return print_json(&report);
            }
            println!("generated {}", report.filename);
            println!("{}", client.reports().download_url(&report.filename));
        }
        Command::Download { filename, dir } => {
            let path = client.reports().download_to(&filename, dir)?;
            println!("{}", path.display());
        }
        Command::Sync => {
            let result = client.sync_vector_db()?;
            if json {
                return print_json(&result);
            }
            println!("{}", result.message);
        }
        Command::Insights => {
            let mut view = InsightsView::new();
            view.refresh(&client);
            let insights = ready(view.state())?;
            if json {
                return print_json(insights);
            }
            for card in insights.performance_cards.iter().chain(&insights.marketing_cards) {
                println!("## {}\n{}", card.title, card.description);
                if let Some(metric) = &card.metric {
                    println!("   {}", metric);
                }
                for rec in &card.recommendations {
                    println!("   - {}", rec);
                }
            }
            for t in &insights.category_trend {
                println!("{:<16} {:+.0}%", t.category, t.growth);
            }
        }
    }
    Ok(())
}

fn ready<T>(state: &LoadState<T>) -> CliResult<&T> {
    match state {
        LoadState::Ready(data) => Ok(data),
        LoadState::Failed(failure) => Err(CliError::View(failure.clone())),
        LoadState::Loading => Err(CliError::Request(RankingError::Cancelled)),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| RankingError::Decode {
        context: "Failed to render JSON",
        source,
    })?;
    println!("{}", text);
    Ok(())
}
