// Shared test helpers for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use unity_validate::core::error::{ValidateError, ValidateResult};
use unity_validate::core::models::{Invocation, RunTimestamp};
use unity_validate::infra::command::{ConversionDirection, PathConverter, RunnerLauncher};
use unity_validate::infra::environment::HostEnvironment;
use unity_validate::infra::paths::PathTranslator;

/// A converter that records every call and maps paths with a fixed rule:
/// `/home/dev/game` <-> `C:\home\dev\game`.
#[derive(Default)]
pub struct FakeConverter {
    pub calls: Mutex<Vec<(ConversionDirection, String)>>,
    /// Paths for which conversion fails.
    pub fail_on: Option<String>,
}

impl FakeConverter {
    pub fn failing_on(path: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(path.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(ConversionDirection, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PathConverter for FakeConverter {
    async fn convert(&self, direction: ConversionDirection, path: &str) -> ValidateResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((direction, path.to_string()));

        if self.fail_on.as_deref() == Some(path) {
            return Err(ValidateError::PathConversion {
                tool: "fake".to_string(),
                path: path.to_string(),
                reason: "fake converter refused".to_string(),
            });
        }

        Ok(match direction {
            ConversionDirection::ToWindows => format!("C:{}", path.replace('/', "\\")),
            ConversionDirection::ToUnix => {
                let rest = path.get(2..).unwrap_or_default().replace('\\', "/");
                format!("/mnt/c{}", rest)
            }
        })
    }
}

/// A launcher that records invocations and replays scripted exit codes.
/// Once the script runs out every launch exits with 0.
#[derive(Default)]
pub struct FakeLauncher {
    pub launched: Mutex<Vec<Invocation>>,
    pub exit_codes: Mutex<VecDeque<Option<i32>>>,
}

impl FakeLauncher {
    pub fn with_exit_codes(codes: impl IntoIterator<Item = Option<i32>>) -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            exit_codes: Mutex::new(codes.into_iter().collect()),
        }
    }

    pub fn launched(&self) -> Vec<Invocation> {
        self.launched.lock().unwrap().clone()
    }
}

impl RunnerLauncher for FakeLauncher {
    async fn launch(&self, invocation: &Invocation) -> ValidateResult<Option<i32>> {
        self.launched.lock().unwrap().push(invocation.clone());
        Ok(self.exit_codes.lock().unwrap().pop_front().unwrap_or(Some(0)))
    }
}

pub fn native_translator() -> PathTranslator<FakeConverter> {
    PathTranslator::new(HostEnvironment::Native, FakeConverter::default())
}

pub fn wsl_translator() -> PathTranslator<FakeConverter> {
    PathTranslator::new(HostEnvironment::Wsl, FakeConverter::default())
}

/// 2025-01-02 03:04:05 -> `20250102-030405`
pub fn fixed_timestamp() -> RunTimestamp {
    let datetime = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    RunTimestamp::from_datetime(datetime)
}

/// Writes an executable shell script standing in for the Unity editor.
/// It creates the files passed via `-testResults` and `-logFile`, then exits
/// with `$FAKE_UNITY_EXIT` (default 0).
#[cfg(unix)]
pub fn write_fake_unity(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
results=""
log=""
while [ $# -gt 0 ]; do
  case "$1" in
    -testResults) results="$2"; shift ;;
    -logFile) log="$2"; shift ;;
  esac
  shift
done
[ -n "$results" ] && echo '<test-run result="Passed"/>' > "$results"
[ -n "$log" ] && echo 'fake unity log' > "$log"
exit "${FAKE_UNITY_EXIT:-0}"
"#;
    let path = dir.join("FakeUnity");
    std::fs::write(&path, script).expect("Failed to write fake Unity script");
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    path
}
