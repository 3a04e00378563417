//! JSON to CSV conversion tests

use std::fs;
use ta_toolkit::error::ToolkitError;
use ta_toolkit::export::json_csv::{json_to_csv, DEFAULT_INDEX_COLUMN};
use tempfile::tempdir;

fn read_csv(path: &std::path::Path) -> Vec<String> {
    let bytes = fs::read(path).expect("CSV not written");
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"), "missing byte-order mark");
    String::from_utf8(bytes[3..].to_vec())
        .unwrap()
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_union_of_keys_with_index() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.csv");
    fs::write(
        &input,
        r#"[
            {"name": "Ann", "comment": "good\nwork"},
            {"name": "Bob", "score": 7, "late": true}
        ]"#,
    )
    .unwrap();

    let rows = json_to_csv(&input, &output, DEFAULT_INDEX_COLUMN).unwrap();
    assert_eq!(rows, 2);

    assert_eq!(
        read_csv(&output),
        vec![
            "index,name,comment,score,late",
            "1,Ann,good work,,",
            "2,Bob,,7,True",
        ]
    );
}

#[test]
fn test_single_object() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("one.json");
    let output = dir.path().join("one.csv");
    fs::write(&input, r#"{"问题": "多行\r\n文本", "tags": ["a", "b"], "note": null}"#).unwrap();

    let rows = json_to_csv(&input, &output, "序号").unwrap();
    assert_eq!(rows, 1);

    assert_eq!(
        read_csv(&output),
        vec!["序号,问题,tags,note", r#"1,多行 文本,"[""a"",""b""]","#]
    );
}

#[test]
fn test_empty_list_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("empty.json");
    let output = dir.path().join("empty.csv");
    fs::write(&input, "[]").unwrap();

    assert_eq!(json_to_csv(&input, &output, "index").unwrap(), 0);
    assert!(!output.exists());
}

#[test]
fn test_non_object_elements_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("numbers.json");
    fs::write(&input, "[1, 2, 3]").unwrap();

    let result = json_to_csv(&input, &dir.path().join("out.csv"), "index");
    assert!(matches!(result, Err(ToolkitError::InvalidJson(_))));
}

#[test]
fn test_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ not json").unwrap();

    let result = json_to_csv(&input, &dir.path().join("out.csv"), "index");
    assert!(matches!(result, Err(ToolkitError::JsonParse(_))));
}
