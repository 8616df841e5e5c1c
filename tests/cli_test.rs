use std::process::Command;

use anyhow::Result;

use mmusim::MmuStats;

mod common;
use common::create_trace_file;

const TRACE: [&str; 6] = [
    "00001000 W",
    "00002000 R",
    "00003000 R",
    "00001000 R",
    "00004000 R",
    "00005000 R",
];

#[test]
fn test_cli_run_report() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg("run")
        .arg(trace.path())
        .args(["3", "lru", "quiet"])
        .output()?;

    assert!(output.status.success(), "run command failed");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("total memory frames:  3"));
    assert!(stdout.contains("events in trace:      6"));
    assert!(stdout.contains("total disk reads:     5"));
    assert!(stdout.contains("total disk writes:    0"));

    Ok(())
}

#[test]
fn test_cli_run_json() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg("run")
        .arg(trace.path())
        .args(["1", "clock", "--json"])
        .output()?;

    assert!(output.status.success(), "run --json failed");
    let stats: MmuStats = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats.page_faults, 6);
    assert_eq!(stats.disk_writes, 1);

    Ok(())
}

#[test]
fn test_cli_debug_mode_prints_events() -> Result<()> {
    let trace = create_trace_file(&TRACE[..2])?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg("run")
        .arg(trace.path())
        .args(["1", "rand", "debug", "--seed", "1"])
        .output()?;

    assert!(output.status.success(), "debug run failed");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("DEBUG: Page fault at page 1"));
    assert!(stdout.contains("DEBUG: Write page 1 to disk"));
    assert!(stdout.contains("DEBUG: Evict page 1"));

    Ok(())
}

#[test]
fn test_cli_compare_lists_every_policy() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg("compare")
        .arg(trace.path())
        .args(["2", "--seed", "3"])
        .output()?;

    assert!(output.status.success(), "compare command failed");
    let stdout = String::from_utf8(output.stdout)?;
    for policy in ["rand", "lru", "clock"] {
        assert!(stdout.contains(policy), "missing row for {}", policy);
    }

    Ok(())
}

#[test]
fn test_cli_rejects_zero_frames() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg("run")
        .arg(trace.path())
        .args(["0", "lru"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Invalid MMU configuration"));

    Ok(())
}

#[test]
fn test_cli_positional_form_runs_trace() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg(trace.path())
        .args(["1", "lru", "quiet"])
        .output()?;

    assert!(output.status.success(), "positional invocation failed");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("total memory frames:  1"));
    assert!(stdout.contains("total disk reads:     6"));
    assert!(stdout.contains("total disk writes:    1"));

    Ok(())
}

#[test]
fn test_cli_positional_form_with_options() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg(trace.path())
        .args(["2", "random", "--seed", "9", "--json"])
        .output()?;

    assert!(output.status.success(), "positional --json invocation failed");
    let stats: MmuStats = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats.accesses(), 6);
    assert_eq!(stats.page_faults, stats.disk_reads);

    Ok(())
}

#[test]
fn test_cli_unknown_policy() -> Result<()> {
    let trace = create_trace_file(&TRACE)?;

    let output = Command::new(env!("CARGO_BIN_EXE_mmusim"))
        .arg(trace.path())
        .args(["2", "fifo"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unknown replacement policy: fifo"));

    Ok(())
}
