// Unit tests for the post loader.
//
// Covers record-shape extraction and every load failure mode: missing file,
// invalid JSON, and a root that isn't an array. All failures must collapse
// to an empty vec, never a panic or an error.

use std::fs;
use std::path::PathBuf;

use roadwatch::posts::{load_posts_from_file, Post};
use serde_json::json;

/// Write `content` to a unique temp file and return its path.
fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("roadwatch-test-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

// ============================================================
// Post::from_record — required-field extraction
// ============================================================

#[test]
fn record_with_all_fields() {
    let record = json!({
        "text": "Huge pothole on Elm St",
        "reporter": "Jane",
        "link": "http://x/1"
    });
    let post = Post::from_record(&record).unwrap();
    assert_eq!(post.text, "Huge pothole on Elm St");
    assert_eq!(post.reporter, "Jane");
    assert_eq!(post.link, "http://x/1");
}

#[test]
fn record_missing_text() {
    let record = json!({"reporter": "Jane", "link": "http://x/1"});
    assert!(Post::from_record(&record).is_none());
}

#[test]
fn record_missing_reporter() {
    let record = json!({"text": "pothole", "link": "http://x/1"});
    assert!(Post::from_record(&record).is_none());
}

#[test]
fn record_missing_link() {
    let record = json!({"text": "pothole", "reporter": "Jane"});
    assert!(Post::from_record(&record).is_none());
}

#[test]
fn record_with_non_string_field() {
    // A numeric link is as unusable as a missing one
    let record = json!({"text": "pothole", "reporter": "Jane", "link": 42});
    assert!(Post::from_record(&record).is_none());
}

#[test]
fn record_not_an_object() {
    assert!(Post::from_record(&json!("just a string")).is_none());
    assert!(Post::from_record(&json!(null)).is_none());
}

#[test]
fn record_extra_fields_ignored() {
    let record = json!({
        "text": "pothole",
        "reporter": "Jane",
        "link": "http://x/1",
        "likes": 12,
        "scraped_at": "2024-01-01"
    });
    assert!(Post::from_record(&record).is_some());
}

// ============================================================
// load_posts_from_file — failure modes collapse to empty
// ============================================================

#[test]
fn load_missing_file_returns_empty() {
    let path = std::env::temp_dir().join("roadwatch-test-definitely-not-here.json");
    assert!(load_posts_from_file(&path).is_empty());
}

#[test]
fn load_invalid_json_returns_empty() {
    let path = temp_file("invalid.json", "{not json at all");
    assert!(load_posts_from_file(&path).is_empty());
    fs::remove_file(path).unwrap();
}

#[test]
fn load_non_array_root_returns_empty() {
    let path = temp_file("object-root.json", r#"{"text": "a single post object"}"#);
    assert!(load_posts_from_file(&path).is_empty());
    fs::remove_file(path).unwrap();
}

#[test]
fn load_valid_array() {
    let path = temp_file(
        "valid.json",
        r#"[
            {"text": "Pothole on Elm", "reporter": "Jane", "link": "http://x/1"},
            {"text": "Nice sunset", "reporter": "Bob", "link": "http://x/2"}
        ]"#,
    );
    let records = load_posts_from_file(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["reporter"], "Jane");
    assert_eq!(records[1]["reporter"], "Bob");
    fs::remove_file(path).unwrap();
}

#[test]
fn load_empty_array() {
    let path = temp_file("empty.json", "[]");
    assert!(load_posts_from_file(&path).is_empty());
    fs::remove_file(path).unwrap();
}

#[test]
fn load_preserves_order_and_malformed_entries() {
    // The loader returns raw records; shape filtering happens later in the
    // pipeline, so malformed entries must survive the load intact.
    let path = temp_file(
        "mixed.json",
        r#"[{"reporter": "NoText"}, {"text": "t", "reporter": "r", "link": "l"}]"#,
    );
    let records = load_posts_from_file(&path);
    assert_eq!(records.len(), 2);
    assert!(Post::from_record(&records[0]).is_none());
    assert!(Post::from_record(&records[1]).is_some());
    fs::remove_file(path).unwrap();
}
