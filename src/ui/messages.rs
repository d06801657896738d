//! User facing status lines. Everything goes to stderr so that stdout
//! carries only the report itself.

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn emit<T: fmt::Display>(colour: Colour, icon: &str, msg: T) {
    let style = Style::new().bold().fg(colour);
    eprintln!("{} {}", style.paint(icon), msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Colour::Blue, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Colour::Green, ICON_OK, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Colour::Yellow, ICON_WARN, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Colour::Red, ICON_ERR, msg);
}
