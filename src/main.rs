use anyhow::{Context, Result};
use clap::Parser;
use fixerio::{Exchange, models::DEFAULT_HOST};

#[derive(Debug, Parser)]
#[command(name = "fixerio", about = "Fetch currency exchange rates from fixer.io")]
struct Cli {
    /// Currency the rates are expressed against
    #[arg(short, long, env = "FIXER_BASE", default_value = "EUR")]
    base: String,

    /// Comma separated list of currencies to return (all when omitted)
    #[arg(short, long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Date for a historical query, e.g. 2023-01-15 or "January 15, 2023"
    #[arg(short, long)]
    date: Option<String>,

    /// Use https instead of http
    #[arg(long, env = "FIXER_SECURE")]
    secure: bool,

    /// API host, without scheme
    #[arg(long, env = "FIXER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Print the full response as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut exchange = Exchange::new();
    exchange.host(&cli.host).base(&cli.base).symbols(cli.symbols);

    if cli.secure {
        exchange.secure();
    }

    if let Some(date) = &cli.date {
        exchange
            .historical(date)
            .with_context(|| "Invalid --date")?;
    }

    let response = exchange
        .get_response()
        .await
        .with_context(|| format!("Failed to fetch rates from {}", exchange.url()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for (currency, rate) in response.rates() {
        println!("{} {}", currency, rate);
    }

    Ok(())
}
