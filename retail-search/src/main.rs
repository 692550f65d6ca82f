use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use retail_search::config::{DEFAULT_CONDITION, DEFAULT_QUERY};
use retail_search::{run, AppError, Dependencies, SearchArgs};
use retail_search_repository::RetailSearchConfig;

#[derive(Parser)]
#[command(name = "retail-search")]
#[command(about = "Search the product catalog, boosting products that match a condition", long_about = None)]
struct Cli {
    /// Free-text query
    #[arg(long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Boost condition, e.g. 'colorFamilies: ANY("Blue")'
    #[arg(long, default_value = DEFAULT_CONDITION)]
    condition: String,

    /// Boost strength between -1.0 (bury) and 1.0 (promote)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = parse_boost)]
    boost: f32,

    /// Results per page (overrides RETAIL_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<u32>,

    /// Visitor identifier (overrides RETAIL_VISITOR_ID)
    #[arg(long)]
    visitor_id: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn search_args(&self) -> SearchArgs {
        SearchArgs {
            query: self.query.clone(),
            condition: self.condition.clone(),
            boost: self.boost,
        }
    }

    fn apply_overrides(&self, config: RetailSearchConfig) -> RetailSearchConfig {
        config.with_overrides(self.page_size, self.visitor_id.clone())
    }
}

/// Parse a boost strength. Range checks are left to the service; only
/// numbers that cannot be sent as a number are refused.
fn parse_boost(raw: &str) -> Result<f32, String> {
    let boost: f32 = raw
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", raw, e))?;

    if !boost.is_finite() {
        return Err(format!("'{}' is not a finite number", raw));
    }
    Ok(boost)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run_cli(cli: Cli) -> Result<(), AppError> {
    let config = RetailSearchConfig::from_env()
        .map_err(|e| AppError::config(format!("Failed to load configuration: {}", e)))?;

    let dependencies = Dependencies::new(cli.apply_overrides(config))?;

    run(&dependencies, &cli.search_args()).await
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run_cli(cli).await {
        error!(error = %e, "Search failed");
        std::process::exit(1);
    }
}
