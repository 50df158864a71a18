#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory with a config file and a fake `pulumi` on PATH
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("pulumi.log")
    }

    /// Install a `pulumi` shell script that logs `$CONFIG_FILE|args` per call
    /// and exits 1 when its arguments contain `$FAKE_PULUMI_FAIL`
    #[cfg(unix)]
    pub fn install_fake_pulumi(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.root.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let script = bin_dir.join("pulumi");
        fs::write(
            &script,
            r#"#!/bin/sh
printf '%s|%s\n' "$CONFIG_FILE" "$*" >> "$FAKE_PULUMI_LOG"
if [ -n "$FAKE_PULUMI_FAIL" ]; then
  case "$*" in
    *"$FAKE_PULUMI_FAIL"*) exit 1 ;;
  esac
fi
exit 0
"#,
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        bin_dir
    }

    /// Logged pulumi calls as (CONFIG_FILE, arguments)
    pub fn pulumi_calls(&self) -> Vec<(String, String)> {
        match fs::read_to_string(self.log_path()) {
            Ok(content) => content
                .lines()
                .map(|line| {
                    let (env, args) = line.split_once('|').unwrap();
                    (env.to_string(), args.to_string())
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// PATH with `dir` in front
pub fn path_with(dir: &Path) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", dir.display(), current)
}
