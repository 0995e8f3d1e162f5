//! End-to-end tests driving the `soxrun` binary.
//!
//! ```bash
//! cargo test -p soxrun-cli --test cli
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Result of running the soxrun CLI.
#[derive(Debug)]
struct CliResult {
    success: bool,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CliResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }
}

/// A scratch directory with an isolated, empty config file.
struct TestHarness {
    work_dir: TempDir,
    config_path: PathBuf,
}

impl TestHarness {
    fn new() -> Self {
        let work_dir = TempDir::new().expect("Failed to create work dir");
        let config_path = work_dir.path().join("soxrun.toml");
        fs::write(&config_path, "").unwrap();
        Self {
            work_dir,
            config_path,
        }
    }

    fn path(&self) -> &Path {
        self.work_dir.path()
    }

    fn touch(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, b"RIFF").unwrap();
        path
    }

    fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    fn run_cli(&self, args: &[&str]) -> CliResult {
        let output = Command::new(env!("CARGO_BIN_EXE_soxrun"))
            .args(args)
            .current_dir(self.path())
            .env("SOXRUN_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("SOXRUN_SOX")
            .env_remove("SOXRUN_SHELL")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run soxrun");
        CliResult::from_output(output)
    }
}

#[test]
fn test_dry_run_prints_command() {
    let harness = TestHarness::new();
    harness.touch("song.wav");

    let result = harness.run_cli(&["run", "normalize", "song.wav", "--dry-run"]);

    result.assert_success();
    assert!(result
        .stdout
        .contains("Executing: sox 'song.wav' 'song_n.wav' --norm=-0.1"));
    assert!(!harness.path().join("song_n.wav").exists());
}

#[test]
fn test_alias_and_bit_depth_layout() {
    let harness = TestHarness::new();
    harness.touch("a.flac");

    let result = harness.run_cli(&["run", "bitrate16", "a.flac", "-n"]);

    result.assert_success();
    assert!(result
        .stdout
        .contains("Executing: sox 'a.flac' -b 16 'a_16bit.flac'"));
}

#[test]
fn test_missing_file_stops_batch() {
    let harness = TestHarness::new();
    harness.touch("x.wav");
    harness.touch("z.wav");

    let result = harness.run_cli(&["run", "reverse", "x.wav", "y.wav", "z.wav", "-n"]);

    result.assert_failure();
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("'x_rev.wav'"));
    assert!(!result.stdout.contains("z_rev.wav"));
    assert!(result.stderr.contains("The given file does not exist: y.wav"));
}

#[test]
fn test_unknown_operation_fails() {
    let harness = TestHarness::new();
    harness.touch("x.wav");

    let result = harness.run_cli(&["run", "louder", "x.wav", "-n"]);

    result.assert_failure();
    assert!(result.stderr.contains("Unknown operation 'louder'"));
    assert!(!result.stdout.contains("Executing"));
}

#[test]
fn test_selection_file_is_cleared() {
    let harness = TestHarness::new();
    harness.touch("one.wav");
    harness.touch("two.wav");
    let marks = harness.path().join("marks.txt");
    fs::write(&marks, "one.wav\ntwo.wav\n").unwrap();

    let result = harness.run_cli(&["run", "fade", "--selection-file", "marks.txt", "-n"]);

    result.assert_success();
    assert!(result.stdout.contains("'one_faded.wav'"));
    assert!(result.stdout.contains("'two_faded.wav'"));
    assert_eq!(fs::read_to_string(&marks).unwrap(), "");
}

#[test]
fn test_selection_file_cleared_after_abort() {
    let harness = TestHarness::new();
    let marks = harness.path().join("marks.txt");
    fs::write(&marks, "missing.wav\n").unwrap();

    let result = harness.run_cli(&["run", "fade", "-f", "marks.txt", "-n"]);

    result.assert_failure();
    assert_eq!(fs::read_to_string(&marks).unwrap(), "");
}

#[test]
fn test_config_file_sets_tool() {
    let harness = TestHarness::new();
    harness.touch("a.wav");
    harness.write_config("sox = \"/opt/sox/bin/sox\"\ndry_run = true\n");

    let result = harness.run_cli(&["run", "trim", "a.wav"]);

    result.assert_success();
    assert!(result.stdout.contains("Executing: /opt/sox/bin/sox 'a.wav' 'a_t.wav'"));
}

#[test]
fn test_sox_flag_beats_config() {
    let harness = TestHarness::new();
    harness.touch("a.wav");
    harness.write_config("sox = \"/opt/sox/bin/sox\"\n");

    let result = harness.run_cli(&["--sox", "sox-ng", "run", "reverse", "a.wav", "-n"]);

    result.assert_success();
    assert!(result.stdout.contains("Executing: sox-ng 'a.wav'"));
}

#[test]
fn test_bad_config_is_reported() {
    let harness = TestHarness::new();
    harness.write_config("volume = 11\n");

    let result = harness.run_cli(&["list"]);

    result.assert_failure();
    assert!(result.stderr.contains("soxrun.toml"));
}

#[test]
fn test_list_json() {
    let harness = TestHarness::new();

    let result = harness.run_cli(&["list", "--json"]);

    result.assert_success();
    let entries: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let names: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 11);
    assert_eq!(names[0], "normalize");
    assert!(names.contains(&"split-by-silence".to_string()));
}

#[test]
fn test_config_command_prints_effective_values() {
    let harness = TestHarness::new();
    harness.write_config("shell = \"bash\"\n");

    let result = harness.run_cli(&["config"]);

    result.assert_success();
    assert!(result.stdout.contains("shell = \"bash\""));
    assert!(result.stdout.contains("sox = \"sox\""));
}

#[test]
fn test_doctor_reports_missing_sox() {
    let harness = TestHarness::new();

    let result = harness.run_cli(&["--sox", "/no/such/sox", "doctor"]);

    result.assert_failure();
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("sox not found: /no/such/sox"));
}

#[cfg(unix)]
mod with_fake_sox {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    /// Installs a stand-in for sox that copies its first path argument to its second.
    fn install_fake_sox(harness: &TestHarness) -> PathBuf {
        let script = harness.path().join("fake-sox");
        fs::write(&script, "#!/bin/sh\ncp \"$1\" \"$2\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn test_doctor_reports_sox_version() {
        let harness = TestHarness::new();
        let sox = harness.path().join("sox");
        fs::write(&sox, "#!/bin/sh\necho 'sox:      SoX v14.4.2'\n").unwrap();
        fs::set_permissions(&sox, fs::Permissions::from_mode(0o755)).unwrap();

        let result = harness.run_cli(&["--sox", sox.to_str().unwrap(), "doctor"]);

        result.assert_success();
        assert!(result.stdout.contains("ok sox 14.4.2"));
        assert!(result.stdout.contains("All checks passed"));
    }

    #[test]
    fn test_run_executes_tool() {
        let harness = TestHarness::new();
        fs::write(harness.path().join("take one.wav"), b"audio").unwrap();
        let sox = install_fake_sox(&harness);

        let result = harness.run_cli(&[
            "--sox",
            sox.to_str().unwrap(),
            "run",
            "stereo-to-mono",
            "take one.wav",
        ]);

        result.assert_success();
        let output = harness.path().join("take one_mono.wav");
        assert_eq!(fs::read(&output).unwrap(), b"audio");
    }

    #[test]
    fn test_rerun_overwrites_output() {
        let harness = TestHarness::new();
        let input = harness.path().join("loop.wav");
        let sox = install_fake_sox(&harness);

        fs::write(&input, b"first").unwrap();
        harness
            .run_cli(&["--sox", sox.to_str().unwrap(), "run", "norm", "loop.wav"])
            .assert_success();
        fs::write(&input, b"second").unwrap();
        harness
            .run_cli(&["--sox", sox.to_str().unwrap(), "run", "norm", "loop.wav"])
            .assert_success();

        assert_eq!(fs::read(harness.path().join("loop_n.wav")).unwrap(), b"second");
    }
}
