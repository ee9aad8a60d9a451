use colored::Colorize;
use std::{fmt::Display, time::Duration};

pub fn print_part<T: Display>(part: usize, value: &T) {
    let part_string = if part == 1 {
        format!("Part {}", part).red().bold()
    } else {
        format!("Part {}", part).green().bold()
    };
    println!("{}: {}", part_string, format!("{}", value).bold());
}

/// `sss.mmmuuunnn seconds`
#[must_use]
pub fn format_duration(d: Duration) -> String {
    format!(
        "{:03}.{:03}{:03}{:03} seconds",
        d.as_secs(),
        d.subsec_millis(),
        d.subsec_micros() % 1_000,
        d.subsec_nanos() % 1_000,
    )
}
