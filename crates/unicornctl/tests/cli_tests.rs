//! CLI integration tests for unicornctl
//!
//! Tests the CLI surface:
//! - unicornctl sample                 Markdown report for the demo batch
//! - unicornctl report --input FILE    JSON and Markdown from a readings file
//! - unicornctl report (stdin)         readings piped in
//! - unicornctl evaluate METRIC VALUE  single classification, unknown ids
//! - unicornctl --config FILE          overrides applied, bad overrides rejected, load logged

use std::io::Write;
use std::process::{Command, Stdio};

fn unicornctl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_unicornctl"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_sample_markdown() {
    let output = unicornctl().arg("sample").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Layer Status"));
    assert!(stdout.contains("### 🟡 p9 (Execution Membranes)"));
    assert!(stdout.contains("### Membrane Utilization (WARNING)"));
}

#[test]
fn test_report_json_from_file() {
    let file = temp_file(
        r#"[
            {"metric_key": "connection_latency", "value": 45, "timestamp": "2026-01-29T10:00:00Z", "status": "normal"},
            {"metric_key": "topology_coverage", "value": 65, "timestamp": "2026-01-29T10:00:00Z", "status": "normal"},
            {"metric_key": "not_a_metric", "value": 1, "timestamp": "2026-01-29T10:00:00Z", "status": "critical"}
        ]"#,
    );

    let output = unicornctl()
        .args(["report", "--format", "json", "--input"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total_metrics"], 3);
    assert_eq!(report["summary"]["normal"], 1);
    assert_eq!(report["summary"]["warning"], 1);
    assert_eq!(report["summary"]["critical"], 0);
    assert_eq!(report["by_layer"]["j9"]["status"], "warning");
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_report_from_stdin() {
    let mut child = unicornctl()
        .args(["report", "-f", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"metric_key": "membrane_utilization", "value": 95}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["by_layer"]["p9"]["status"], "critical");
}

#[test]
fn test_malformed_input_fails() {
    let file = temp_file("not json");
    let output = unicornctl()
        .arg("report")
        .arg("--input")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_evaluate_unknown_is_not_an_error() {
    let output = unicornctl().args(["evaluate", "quantum_flux", "5"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("unknown"));
}

#[test]
fn test_config_override_and_rejection() {
    let good = temp_file(
        "[output]\nformat = \"json\"\n[thresholds.thread_pool_depth]\nwarning = 10\ncritical = 20\n",
    );
    let output = unicornctl()
        .arg("--config")
        .arg(good.path())
        .arg("sample")
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["by_layer"]["p9"]["status"], "critical");

    let bad = temp_file("[thresholds.gradient_entropy]\nwarning = 1\ncritical = 2\n");
    let output = unicornctl()
        .arg("--config")
        .arg(bad.path())
        .arg("metrics")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("gradient_entropy"));
}

#[test]
fn test_config_load_is_logged() {
    let config = temp_file("[logging]\nlevel = \"info\"\n");
    let output = unicornctl()
        .arg("--config")
        .arg(config.path())
        .arg("metrics")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loaded telemetry config"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("loaded telemetry config"));
}
