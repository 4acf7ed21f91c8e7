//! Dashboard process entry point

use clap::Parser;
use std::path::PathBuf;
use tokio::signal;

use shared::{Component, Year, logging};

use dashboard::{
    DashboardConfig, DashboardResult, DashboardServer,
    services::{RealDatasetLoader, RealStaticFileServer},
};

/// Command line arguments, each overridable from the environment
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Bike sharing rental dashboard")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, env = "DASHBOARD_PORT", default_value = "8501")]
    port: u16,

    /// Rental dataset (CSV with yr, mnth, hr, temp, cnt columns)
    #[arg(long, env = "DASHBOARD_DATA", default_value = "data/data.csv")]
    data: PathBuf,

    /// Static files directory
    #[arg(long, env = "DASHBOARD_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// Year selected when a request does not name one
    #[arg(long, env = "DASHBOARD_DEFAULT_YEAR")]
    default_year: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DASHBOARD_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> DashboardConfig {
        DashboardConfig {
            host: self.host,
            port: self.port,
            data_path: self.data,
            static_dir: self.static_dir,
            default_year: self.default_year.map(Year),
        }
    }
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    // .env is optional; real environment variables take precedence
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = args.into_config();
    let addr = config.bind_addr()?;
    logging::log_startup(Component::Server, &format!("bike sharing dashboard on {}", addr));

    let loader = RealDatasetLoader::new(&config.data_path);
    let static_server = RealStaticFileServer::new(&config.static_dir);
    let server = DashboardServer::from_loader(&loader, config, static_server).await?;

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(Component::Server, "Received Ctrl+C signal"),
            Err(err) => logging::log_error(Component::Server, "Signal handling", &err),
        }
    };

    server.run(addr, shutdown).await?;

    logging::log_success(Component::Server, "Dashboard stopped gracefully");
    Ok(())
}
