use clap::Parser;
use pokenav::core::config::{self, PokenavConfig};
use pokenav::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pokenav", about = "Terminal Pokédex browser")]
struct Args {
    /// Override the PokeAPI base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Entries fetched per list page
    #[arg(short, long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to pokenav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pokenav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        PokenavConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.limit);

    log::info!(
        "PokéNav starting up: base_url={}, page_limit={}",
        resolved.base_url,
        resolved.page_limit
    );

    tui::run(resolved)
}
