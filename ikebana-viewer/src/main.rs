use clap::Parser;
use constants::endpoints::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL};
use ikebana_viewer::engine::core::app_setup::create_app;
use ikebana_viewer::engine::core::config::{AssetRoot, ViewerConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "ikebana-viewer",
    version,
    about = "Compose, tune and export optimized ikebana arrangements"
)]
struct Cli {
    /// Optimizer server, e.g. http://127.0.0.1:5000
    #[arg(long, env = "IKEBANA_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Read models from this directory instead of the server
    #[arg(long, env = "IKEBANA_ASSET_DIR")]
    asset_dir: Option<PathBuf>,

    /// Flower type the optimizer must use
    #[arg(long, default_value = "")]
    forced_flower: String,

    /// Vase to show (筒型花器 or 皿型花器)
    #[arg(long, default_value = "")]
    vase: String,

    /// Timeout for optimizer and asset requests
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Enable debug logging for the viewer
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = ViewerConfig {
        server_url: cli.server_url,
        asset_root: cli
            .asset_dir
            .map_or(AssetRoot::Server, AssetRoot::Directory),
        forced_flower: cli.forced_flower,
        vase: cli.vase,
        request_timeout: Duration::from_secs(cli.request_timeout_secs),
        auto_start: true,
    };

    create_app(config, cli.verbose).run();
}
