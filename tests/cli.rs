use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn make_text() -> Command {
    Command::new(env!("CARGO_BIN_EXE_make_text"))
}

fn setup(body: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let fastq = tmp.path().join("fastq");
    fs::create_dir_all(&fastq).unwrap();
    fs::write(
        tmp.path().join("samples.csv"),
        format!("NGS_sample_name,Ref_sequence,Guide_Sequence\n{}", body),
    )
    .unwrap();
    (tmp, format!("{}/", fastq.display()))
}

#[test]
fn writes_batch_file_and_log() {
    let (tmp, fastq) = setup("S1,ACGT,AC\n");
    let log = tmp.path().join("logs").join("run.log");
    fs::create_dir_all(log.parent().unwrap()).unwrap();
    fs::write(&log, "stale line from a previous run\n").unwrap();

    let status = make_text()
        .current_dir(tmp.path())
        .args(["samples.csv", fastq.as_str(), "input.txt", "--plot_window_size", "25"])
        .arg("--log-file")
        .arg(&log)
        .env_remove("RUST_LOG")
        .status()
        .unwrap();
    assert!(status.success());

    let text = fs::read_to_string(tmp.path().join("input.txt")).unwrap();
    let row = text.lines().nth(1).unwrap();
    assert!(row.starts_with("S1\t-3\t1\t10\t"));
    assert!(row.ends_with("\tACGT\tAC\t0.2\t25"));

    let log_text = fs::read_to_string(&log).unwrap();
    assert!(!log_text.contains("stale line"));
    assert!(log_text.contains("File does not exist"));
    assert!(log_text.contains("Successfully converted"));
}

#[test]
fn null_cell_exits_nonzero_and_logs_error() {
    let (tmp, fastq) = setup("S1,,AC\n");

    let output = make_text()
        .current_dir(tmp.path())
        .args(["samples.csv", fastq.as_str(), "input.txt"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!tmp.path().join("input.txt").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Null values found in input table at row(s): 1"));

    // Default log location is relative to the working directory
    let log_text = fs::read_to_string(tmp.path().join("tmp").join("make_text_log.log")).unwrap();
    assert!(log_text.contains("ERROR"));
    assert!(log_text.contains("Null values found in input table"));
}

#[test]
fn missing_fastq_dir_exits_nonzero_and_logs_error() {
    let (tmp, _) = setup("S1,ACGT,AC\n");

    let status = make_text()
        .current_dir(tmp.path())
        .args(["samples.csv", "no_such_dir/", "input.txt"])
        .env_remove("RUST_LOG")
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!tmp.path().join("input.txt").exists());
    let log_text = fs::read_to_string(tmp.path().join("tmp").join("make_text_log.log")).unwrap();
    assert!(log_text.contains("FASTQ directory does not exist"));
}

#[test]
fn unreadable_preset_exits_nonzero_and_logs_error() {
    let (tmp, fastq) = setup("S1,ACGT,AC\n");

    let status = make_text()
        .current_dir(tmp.path())
        .args(["samples.csv", fastq.as_str(), "input.txt", "--config", "absent.json"])
        .env_remove("RUST_LOG")
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!tmp.path().join("input.txt").exists());
    let log_text = fs::read_to_string(tmp.path().join("tmp").join("make_text_log.log")).unwrap();
    assert!(log_text.contains("ERROR"));
    assert!(log_text.contains("Failed to load parameter preset"));
}
