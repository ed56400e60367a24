//! Tests of the `coco2pascal` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coco2pascal"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_wrong_argument_count() {
    for args in [&[][..], &["./"][..], &["./", "val2014", "extra"][..]] {
        let tmp = tempfile::tempdir().unwrap();
        let output = run(tmp.path(), args);

        assert!(!output.status.success(), "args: {:?}", args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("usage:"), "stdout: {}", stdout);
        assert!(!tmp.path().join("annotations_pascalformat").exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}

#[test]
fn test_missing_input_file() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run(tmp.path(), &["./", "val2014"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("instances_val2014.json"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());

    let out = tmp.path().join("annotations_pascalformat");
    if out.exists() {
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}

#[test]
fn test_successful_run() {
    let tmp = tempfile::tempdir().unwrap();
    let ann_dir = tmp.path().join("coco").join("annotations");
    fs::create_dir_all(&ann_dir).unwrap();
    fs::write(
        ann_dir.join("instances_val2014.json"),
        r#"{
            "images": [
                {"id": 1, "file_name": "000001.jpg", "width": 100, "height": 200},
                {"id": 2, "file_name": "000002.jpg", "width": 10, "height": 10}
            ],
            "annotations": [
                {"id": 1, "image_id": 1, "category_id": 5, "bbox": [10.4, 20.6, 30.0, 40.0]}
            ],
            "categories": [{"id": 5, "name": "airplane"}]
        }"#,
    )
    .unwrap();

    let output = run(tmp.path(), &["coco", "val2014"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0 out of 2\n1 out of 2\n"
    );

    let out = tmp.path().join("annotations_pascalformat");
    let xml = fs::read_to_string(out.join("000001.xml")).unwrap();
    assert!(xml.contains("<name>\n5\n</name>"));
    assert!(xml.contains("<ymax>\n61\n</ymax>"));
    assert!(out.join("000002.xml").is_file());
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let ann_dir = tmp.path().join("annotations");
    fs::create_dir_all(&ann_dir).unwrap();
    fs::write(
        ann_dir.join("instances_val2014.json"),
        r#"{
            "images": [{"id": 1, "file_name": "000001.jpg", "width": 1, "height": 1}],
            "annotations": [],
            "categories": []
        }"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_coco2pascal"))
        .args(["./", "val2014"])
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .stdout(fs::File::create("/dev/full").unwrap())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
