use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("<input>", "");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
    assert!(buf.cursor().is_eof());
}

#[test]
fn sentinels_follow_source() {
    let buf = SourceBuffer::new("<input>", "ab");
    assert_eq!(buf.as_str(), "ab");
    assert_eq!(buf.buf.as_bytes(), b"ab\0\0");
}

#[test]
fn interior_null_is_content() {
    let buf = SourceBuffer::new("<input>", "a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_str(), "a\0b");
}

#[test]
fn name_is_kept() {
    let buf = SourceBuffer::new("main.rl", "x");
    assert_eq!(buf.name(), "main.rl");
}

#[test]
fn from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "int x = 42;").unwrap();

    let buf = SourceBuffer::from_path(file.path()).unwrap();
    assert_eq!(buf.as_str(), "int x = 42;");
    assert_eq!(buf.name(), file.path().display().to_string());
}

#[test]
fn from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.rl");

    let err = SourceBuffer::from_path(&missing).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read"));
}

#[test]
fn from_path_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'a', 0xFF, 0xFE]).unwrap();

    let err = SourceBuffer::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::InvalidUtf8 { .. }));
    assert!(err.to_string().contains("invalid UTF-8"));
}
