#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::{assert::Assert, Command};
use chrono::{Duration, Local};
use tempfile::TempDir;

pub const BIN: &str = "charter_inquiry_cli";
pub const SCRIPT_ENV: &str = "CHARTER_INQUIRY_CLI_SCRIPT";
pub const HOME_ENV: &str = "CHARTER_INQUIRY_HOME";

/// Isolated data directory for one test; removed when dropped.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn draft_file(&self) -> PathBuf {
        self.path().join("drafts").join("rhumuda_inquiry_form.json")
    }

    pub fn outbox_files(&self) -> Vec<PathBuf> {
        let outbox = self.path().join("outbox");
        match std::fs::read_dir(outbox) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Runs the CLI in script mode with `script` on stdin.
    pub fn run_script(&self, script: &str) -> Assert {
        Command::cargo_bin(BIN)
            .expect("binary is built")
            .env(SCRIPT_ENV, "1")
            .env(HOME_ENV, self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .write_stdin(script.to_string())
            .assert()
    }
}

/// A date inside the booking window, `days` from today.
pub fn days_from_today(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn customer_commands() -> &'static str {
    "set first Aminah
set last Yusof
set phone 013 222 4455
set email aminah@example.my
set address \"22 Jalan Kapas\"
set postcode 21600
set city Marang
set country Malaysia
"
}

/// Script that walks all three steps without submitting.
pub fn completed_steps_script() -> String {
    format!(
        "{customer}next
set date {date}
set passengers 4
set package 2
addon add 1
addon add 3
next
set alt1 {alt}
set remarks \"Vegetarian lunch\"
",
        customer = customer_commands(),
        date = days_from_today(14),
        alt = days_from_today(16),
    )
}
