use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/", " "])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Await `task` while showing a spinner, clearing it afterwards.
pub async fn with_spinner<T>(message: &str, task: impl Future<Output = T>) -> T {
    let spinner = create_spinner(message);
    let output = task.await;
    spinner.finish_and_clear();
    output
}
