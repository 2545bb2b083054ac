//! Spinner helpers for long-running CLI steps.

use std::time::Duration;

use dialoguer::console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub(super) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        bar.set_style(spinner_style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

pub(super) fn succeed(bar: &ProgressBar, message: &str) {
    bar.finish_and_clear();
    println!("{} {message}", style("✔").green());
}

pub(super) fn fail(bar: &ProgressBar, message: &str) {
    bar.finish_and_clear();
    eprintln!("{} {message}", style("✖").red());
}
