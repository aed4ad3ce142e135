use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use opensearch_tools::output::OutputFormat;
use opensearch_tools::{Command, Dependencies, ToolsError};

#[derive(Parser)]
#[command(name = "opensearch-tools")]
#[command(about = "Inspect and query OpenSearch clusters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Named cluster from the cluster file (empty for the default cluster)
    #[arg(long, default_value = "", global = true)]
    cluster: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, ToolsError> {
    let deps = Dependencies::from_env()?;
    cli.command
        .execute(&deps.helper, &cli.cluster, cli.output)
        .await
}

/// Logs go to stderr so stdout only carries command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
