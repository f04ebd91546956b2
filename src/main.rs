use clap::Parser;
use invdash::core::config::{self, CliOverrides};
use invdash::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invdash", about = "Terminal dashboard for a server inventory API")]
struct Args {
    /// Config file (default: ./config.json, then ~/.invdash/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between automatic refreshes
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "invdash.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let path = config::config_path(args.config.as_deref());
    let cli = CliOverrides {
        refresh_interval_secs: args.refresh_secs,
    };
    let resolved = match config::load_config(&path).and_then(|file| config::resolve(&file, &cli)) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Error loading configuration: {e}");
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    log::info!("invdash starting up against {}", resolved.api_base_url);

    tui::run(resolved)
}
