use clap::Args;
use paypertick_core::earnings::{compute_earnings, DetailView, PanelLabels, NOT_CONFIGURED};
use paypertick_core::{ticker, Config};
use serde::Serialize;

use super::{print_event, resolve_now};

#[derive(Args)]
pub struct StatusArgs {
    /// Evaluate at this time of day (HH:MM) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run_status(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let now = resolve_now(args.at.as_deref())?;
    let event = ticker::snapshot(&config.work, now, &mut rand::thread_rng());
    print_event(&event, args.json)
}

#[derive(Serialize)]
struct DetailsOutput {
    details: DetailView,
    labels: PanelLabels,
}

pub fn run_details(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let now = resolve_now(args.at.as_deref())?;

    let result = match compute_earnings(&config.work, now.time()) {
        Ok(result) => result,
        Err(e) => {
            if args.json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                println!("{NOT_CONFIGURED}");
                println!("({e})");
            }
            return Ok(());
        }
    };

    let output = DetailsOutput {
        details: DetailView::new(&config.work, &result),
        labels: PanelLabels::new(&result),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.details);
        println!();
        println!("{}", output.labels.daily_salary);
        println!("{}", output.labels.earned_today);
        println!("{}", output.labels.effective_work_time);
        println!("Phase: {}", result.phase.label());
    }
    Ok(())
}
