use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mock-server", about = "In-memory employee records service")]
struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    /// Log filter; logs go to stderr.
    #[arg(long, env = "RUST_LOG", default_value = "info,tower_http=debug")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let listener = TcpListener::bind((args.host, args.port)).await?;
    info!(addr = %listener.local_addr()?, path = mock_server::COLLECTION_PATH, "listening");
    mock_server::run(listener).await?;
    Ok(())
}
