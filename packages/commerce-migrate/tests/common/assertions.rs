//! Custom assertions for output verification

use std::fs;
use std::path::Path;

use commerce_migrate::FileOutcome;

/// Assert the file names directly inside `dir`, sorted
pub fn assert_dir_files(dir: &Path, expected: &[&str]) {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected, "unexpected files in {}", dir.display());
}

/// Assert that nothing at all exists below `dir`
pub fn assert_no_output(dir: &Path) {
    if !dir.exists() {
        return;
    }
    let entries: Vec<_> = walk_files(dir);
    assert!(entries.is_empty(), "expected no output, found {entries:?}");
}

fn walk_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk_files(&path));
        } else {
            files.push(path.display().to_string());
        }
    }
    files
}

pub fn assert_success(outcome: &FileOutcome, class_name: &str) {
    match outcome {
        FileOutcome::Converted { class_name: got, .. } => assert_eq!(got, class_name),
        FileOutcome::Failed { file, error, .. } => panic!("{file} failed: {error}"),
    }
}

pub fn assert_failure_contains(outcome: &FileOutcome, fragment: &str) {
    let error = outcome
        .error()
        .unwrap_or_else(|| panic!("{} unexpectedly succeeded", outcome.file()));
    assert!(
        error.contains(fragment),
        "error `{error}` does not contain `{fragment}`"
    );
}
