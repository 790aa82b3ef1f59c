use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Events with this target are written verbatim by the log formatter.
pub const PRINT_TARGET: &str = "lotkeeper::print";

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

const BANNER: &str = r#"
     _       _   _
    | | ___ | |_| | _____  ___ _ __   ___ _ __
    | |/ _ \| __| |/ / _ \/ _ \ '_ \ / _ \ '__|
    | | (_) | |_|   <  __/  __/ |_) |  __/ |
    |_|\___/ \__|_|\_\___|\___| .__/ \___|_|
                              |_|
"#;

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ LOTKEEPER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    print(&format!("{}", BANNER.color(colors::PRIMARY)));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Prints `key.....: value`, padding keys to [`GLOBAL_KEY_WIDTH`].
pub fn aligned_line(key: &str, value: impl Display) {
    let colon: ColoredString = key_leader(key, GLOBAL_KEY_WIDTH.get()).color(colors::SEPARATOR);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

/// Dots and colon that follow `key` so values line up one column past `width`.
fn key_leader(key: &str, width: usize) -> String {
    format!("{}:", ".".repeat((width + 1).saturating_sub(key.len())))
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn failure<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = "x".color(colors::FAILURE).bold();
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::FAILURE));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}
