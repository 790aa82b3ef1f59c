use std::time::{Duration, Instant};

use colored::*;
use lotkeeper_common::config::Config;
use lotkeeper_common::{info, success, warn};
use lotkeeper_core::scenario::{self, ScenarioSummary};
use lotkeeper_core::service::LotService;

use crate::mprint;
use crate::terminal::colors;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::reporter::TerminalReporter;

pub fn demo(capacity: usize, cfg: &Config) -> anyhow::Result<()> {
    let steps = scenario::reference_steps(capacity);
    let peak = scenario::peak_occupancy(&steps);

    print_plan(capacity, steps.len(), peak, cfg);
    if capacity < peak {
        warn!("Lot has {capacity} slots but the scenario parks up to {peak} cars at once");
    }

    let mut service = LotService::new(Box::new(TerminalReporter));

    let start_time = Instant::now();
    let summary = scenario::run(&mut service, &steps);
    let total_time = start_time.elapsed();

    if let Some(lot) = service.lot() {
        info!(
            "{} of {} slots occupied at the end of the run",
            lot.occupied(),
            lot.capacity()
        );
        match lot.next_free() {
            Some(slot) => info!("Next car would park in slot {slot}"),
            None => info!("No free slot left"),
        }
    }

    print_summary(summary, total_time, cfg);
    Ok(())
}

fn print_plan(capacity: usize, steps: usize, peak: usize, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    GLOBAL_KEY_WIDTH.set(8);
    print::aligned_line("Capacity", capacity);
    print::aligned_line("Steps", steps);
    print::aligned_line("Peak", format!("{peak} cars"));
    print::header("outcomes", cfg.quiet);
}

fn print_summary(summary: ScenarioSummary, total_time: Duration, cfg: &Config) {
    let steps: ColoredString = format!("{} steps", summary.steps).bold().green();
    let failures: ColoredString = match summary.failures {
        0 => "no failures".bold().green(),
        n => format!("{n} reported failures").bold().yellow(),
    };
    let total_time: ColoredString = format!("{:.2}ms", total_time.as_secs_f64() * 1000.0)
        .bold()
        .yellow();
    let output: &ColoredString =
        &format!("Scenario Complete: {steps}, {failures} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            print::fat_separator();
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
