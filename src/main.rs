use clap::Parser;
use fiirank::application::export::write_csv;
use fiirank::cli::commands::{Cli, Commands};
use fiirank::domain::values::filters::FilterConfig;
use fiirank::domain::values::weights::RankWeights;
use fiirank::FiiRank;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let app = match FiiRank::new(&cli.classification) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing fiirank: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: FiiRank, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Rank {
            min_pvp,
            max_pvp,
            min_liquidity,
            min_dy,
            max_dy,
            weight_pvp,
            weight_dy,
            weight_liquidity,
            weight_vacancy,
            skip_details,
            csv,
        } => {
            let filters = FilterConfig {
                min_pvp,
                max_pvp,
                min_liquidity,
                min_dy,
                max_dy,
            };
            let weights = RankWeights {
                pvp: weight_pvp,
                dy: weight_dy,
                liquidity: weight_liquidity,
                vacancy: weight_vacancy,
            };

            let run = app.rank(&filters, &weights, !skip_details).await?;

            if let Some(path) = csv {
                let file = std::fs::File::create(&path)?;
                write_csv(&run, file)?;
                eprintln!("Wrote {} funds to {}", run.funds.len(), path.display());
            }

            println!("{}", serde_json::to_string_pretty(&run)?);
        }
        Commands::List => {
            let funds = app.list().await?;
            println!("{}", serde_json::to_string_pretty(&funds)?);
        }
    }
    Ok(())
}
