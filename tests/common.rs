#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rrc() -> Command {
    cargo_bin_cmd!("rraincast")
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rraincast.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write `content` to a forecast file inside tempdir and return its path
pub fn temp_forecast(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_forecast.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write forecast file");
    p
}

/// 24 lines at five minute steps starting at `hour:minute`, all with `code`
pub fn forecast_lines(hour: u32, minute: u32, code: u8) -> Vec<String> {
    (0..24)
        .map(|i| {
            let total = hour * 60 + minute + i * 5;
            format!("{:03}|{:02}:{:02}", code, (total / 60) % 24, total % 60)
        })
        .collect()
}

pub fn forecast_text(hour: u32, minute: u32, code: u8) -> String {
    join_lines(&forecast_lines(hour, minute, code))
}

pub fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
