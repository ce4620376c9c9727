//! End-to-end tests for the `gitcode-viewer files` command.

mod common;
use common::prelude::*;

#[test]
fn test_files_sorts_after_background_sync() {
    let output = TestFixture::new()
        .command()
        .args(["files", "--delay-ms", "20"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let (_, after) = stdout
        .split_once("Sync complete. Files sorted by size.")
        .expect("sync completion line");

    let order: Vec<usize> = ["logo.png", "main.cpp", "utils.ts", "styles.css"]
        .iter()
        .map(|name| after.find(name).expect("file listed after sync"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_files_work_steps() {
    TestFixture::new()
        .command()
        .args(["files", "--delay-ms", "0", "--work-steps", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Working 4..."))
        .stdout(predicate::str::contains("Working 5...").not())
        .stdout(predicate::str::contains("[IMG]  logo.png [512x512]"))
        .stdout(predicate::str::contains(
            "       >> Applying colors for TypeScript syntax...",
        ));
}
