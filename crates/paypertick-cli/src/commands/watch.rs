use std::time::Duration;

use chrono::Local;
use clap::Args;
use paypertick_core::{Config, EarningsTicker};
use tracing::{info, warn};

use super::print_event;

/// How often the config file is re-read to pick up edits.
const POLL_SECS: u64 = 1;

#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds (defaults to refresh.interval_secs)
    #[arg(long)]
    interval_secs: Option<u64>,
    /// Print JSON events instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;
    runtime.block_on(watch(args))
}

async fn watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    let interval = args.interval_secs.unwrap_or(config.refresh.interval_secs);
    let mut ticker = EarningsTicker::new(interval);
    let mut rng = rand::thread_rng();
    info!(interval_secs = ticker.interval_secs(), "watching earnings");

    let mut poll = tokio::time::interval(Duration::from_secs(POLL_SECS));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                // Keep the last good config if the file is mid-edit or broken.
                match Config::load() {
                    Ok(fresh) => config = fresh,
                    Err(e) => warn!(error = %e, "could not reload config"),
                }
                for event in ticker.tick(&config.work, Local::now().naive_local(), &mut rng) {
                    print_event(&event, args.json)?;
                }
            }
            _ = &mut ctrl_c => {
                info!("interrupted, stopping");
                break;
            }
        }
    }
    Ok(())
}
