use clap::Parser;
use tracing_subscriber::EnvFilter;

use tickboard_web::config::ServeArgs;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServeArgs::parse();

    if let Err(error) = tickboard_web::serve(args).await {
        tracing::error!("server exited with error: {error}");
        std::process::exit(1);
    }
}
