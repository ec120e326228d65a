use cardioheart_web::app_state::{AppConfig, AppState};
use cardioheart_web::server;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(name = "cardioheart-web")]
#[command(about = "Web front end for binary cardiovascular risk screening")]
struct CliArgs {
    /// Host address to bind the server
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the serialized classifier artifact
    #[arg(long, default_value = "cardioheart.json")]
    model_path: PathBuf,

    /// Directory holding index.html, positive.html and negative.html
    #[arg(long, default_value = "pages")]
    pages_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = AppConfig {
        host: args.host,
        port: args.port,
        model_path: args.model_path,
        pages_dir: args.pages_dir,
    };

    server::init_logging();
    // Artifact and page problems fail here, not at request time.
    let state = AppState::from_config(&config)?;

    actix_web::rt::System::new().block_on(async move {
        tokio::select! {
            res = server::startup(config, state) => {
                res?;
                Ok(())
            }
            _ = signal::ctrl_c() => {
                println!("Received Ctrl+C, shutting down");
                Ok(())
            }
        }
    })
}
