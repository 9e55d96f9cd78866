//! Icon-prefixed user messages. Warnings and errors go to stderr so the
//! chart on stdout stays clean.

use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", ICON_OK, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}  {}", ICON_WARN, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", ICON_ERR, msg);
}
