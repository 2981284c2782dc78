//! End-to-end tests for parsing, merging and storing properties documents

use properties_reader::store::{ConfigStore, MemoryStore};
use properties_reader::{
    document_to_json, merge, merge_all, parse_properties, run_task, FileSource, FsSource,
    TaskError,
};
use serde_json::json;
use similar_asserts::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const APPLICATION: &str = r"# Application settings
! generated by the build

app.name = Demo Service
app.version=3
app.debug = False

server.host=0.0.0.0
server.port=8080
server.banner=Welcome to \
    the demo \
    service

database.url=jdbc:postgresql://db:5432/demo?ssl=true
database.pool.min=2
database.pool.max=20

feature.beta
timeout=-1
";

#[test]
fn parses_realistic_application_file() {
    let doc = parse_properties(APPLICATION);
    assert_eq!(
        document_to_json(doc),
        json!({
            "app": {"name": "Demo Service", "version": 3, "debug": false},
            "server": {
                "host": "0.0.0.0",
                "port": 8080,
                "banner": "Welcome to the demo service"
            },
            "database": {
                "url": "jdbc:postgresql://db:5432/demo?ssl=true",
                "pool": {"min": 2, "max": 20}
            },
            "feature": {"beta": ""},
            "timeout": -1
        })
    );
}

#[test]
fn windows_line_endings_parse_the_same() {
    let crlf = APPLICATION.replace('\n', "\r\n");
    assert_eq!(parse_properties(&crlf), parse_properties(APPLICATION));
}

#[test]
fn merge_overlays_later_files() {
    let base = parse_properties("a=1\nb=2\nshared.x=1\nshared.y=2");
    let overlay = parse_properties("b=3\nc=4\nshared.z=3");

    let mut accumulated = merge_all([base.clone()]);
    merge(&mut accumulated, overlay.clone());

    assert_eq!(
        document_to_json(accumulated),
        json!({"a": 1, "b": 3, "c": 4, "shared": {"z": 3}})
    );
    assert_eq!(merge_all([base, overlay]).len(), 4);
}

struct Unreadable;

impl FileSource for Unreadable {
    fn read(&self, _path: &Path) -> Option<String> {
        panic!("no file should be read");
    }
}

#[test]
fn conflicting_destination_reads_no_files() {
    let mut store = MemoryStore::new();
    store.set("props", json!({"existing": 1}));

    let err = run_task(&mut store, "props", &[PathBuf::from("a.properties")], &Unreadable)
        .expect_err("conflict");

    assert!(matches!(err, TaskError::ConfigConflict { .. }));
    assert_eq!(store.get("props"), Some(&json!({"existing": 1})));
}

#[test]
fn reads_files_from_disk_in_order() {
    let tmp = TempDir::new().expect("tmp");
    let first = tmp.path().join("first.properties");
    let second = tmp.path().join("second.properties");
    fs::write(&first, "a=1\nb=2\n").expect("write");
    fs::write(&second, "b=3\nc=4\n").expect("write");

    let mut store = MemoryStore::new();
    let report = run_task(
        &mut store,
        "props",
        &[first, tmp.path().join("missing.properties"), second],
        &FsSource::new(),
    )
    .expect("run");

    assert_eq!(report.files_read.len(), 2);
    assert_eq!(report.skipped, vec![tmp.path().join("missing.properties")]);
    assert_eq!(store.get("props"), Some(&json!({"a": 1, "b": 3, "c": 4})));
}

#[test]
fn required_file_missing_leaves_store_untouched() {
    let tmp = TempDir::new().expect("tmp");
    let mut store = MemoryStore::new();

    let err = run_task(
        &mut store,
        "props",
        &[tmp.path().join("missing.properties")],
        &FsSource::new(),
    )
    .expect_err("required file");

    assert!(matches!(err, TaskError::RequiredFileMissing { .. }));
    assert!(!store.has("props"));
}
