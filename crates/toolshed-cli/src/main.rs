use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod invoke_cmd;
mod tools_cmd;

#[derive(Parser)]
#[command(name = "toolshed", about = "Toolshed CLI - list and invoke tools on a toolshed server")]
struct Cli {
    /// Toolshed server URL
    #[arg(long, env = "TOOLSHED_URL", default_value = "http://localhost:3000")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools advertised by the server
    Tools,

    /// Invoke a tool and print its output
    Invoke {
        /// Tool name
        tool: String,

        /// Tool parameters as a JSON object
        #[arg(long, default_value = "{}")]
        parameters: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tools => tools_cmd::run(&cli.server_url).await,
        Commands::Invoke { tool, parameters } => {
            invoke_cmd::run(&cli.server_url, &tool, &parameters).await
        }
    }
}
