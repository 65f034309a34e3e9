#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated workspace: a log file and a (missing) config file inside a
/// temp dir, so the user's real configuration is never read.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("mate.csv")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("mate.yaml")
    }

    pub fn mate(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mate");
        cmd.arg("--file")
            .arg(self.log_path())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    pub fn write_log(&self, rows: &[(&str, &str)]) {
        let mut content = String::from("timestamp,title\n");
        for (ts, title) in rows {
            content.push_str(&format!("\"{ts}\",\"{title}\"\n"));
        }
        fs::write(self.log_path(), content).expect("write log");
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).expect("read log")
    }

    pub fn titles(&self) -> Vec<String> {
        self.read_log()
            .lines()
            .skip(1)
            .map(|l| {
                l.rsplit_once(',')
                    .map(|(_, t)| t.trim_matches('"').to_string())
                    .unwrap_or_default()
            })
            .collect()
    }
}
