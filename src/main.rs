use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use greenleaf::core::config::{self, GreenleafConfig};
use greenleaf::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "greenleaf", about = "Browse and shop a plant nursery from the terminal")]
struct Args {
    /// Catalog API base URL (overrides GREENLEAF_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = "greenleaf.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            GreenleafConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Greenleaf starting up against {}", resolved.base_url);

    tui::run(resolved)
}
