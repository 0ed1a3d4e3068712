use scribe::emitter::{render_document, write_document};
use scribe::error::Error;
use scribe::renderer::MiniJinjaEngine;
use scribe::template::README_TEMPLATE;
use tempfile::TempDir;

#[test]
fn test_render_replaces_every_placeholder() {
    let engine = MiniJinjaEngine::new();

    let document = render_document(&engine).unwrap();
    assert!(!document.contains("{{CODE}}"));

    let placeholders = README_TEMPLATE.matches("{{CODE}}").count();
    let fences = document.matches("```").count();
    assert_eq!(fences, placeholders);
}

#[test]
fn test_render_length_invariant() {
    let engine = MiniJinjaEngine::new();

    let document = render_document(&engine).unwrap();
    let placeholders = README_TEMPLATE.matches("{{CODE}}").count();

    // Each substitution swaps the 8-byte placeholder for a 3-byte fence.
    assert_eq!(document.len(), README_TEMPLATE.len() - 5 * placeholders);
}

#[test]
fn test_write_creates_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    write_document(&path, "content").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
}

#[test]
fn test_write_overwrites_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    write_document(&path, "previous document, much longer than the next").unwrap();
    write_document(&path, "final").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "final");
}

#[test]
fn test_emitter_is_idempotent() {
    let engine = MiniJinjaEngine::new();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    let document = render_document(&engine).unwrap();
    write_document(&path, &document).unwrap();
    write_document(&path, &document).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), document);
}

#[test]
fn test_write_to_unwritable_destination() {
    let temp_dir = TempDir::new().unwrap();

    // The destination is an existing directory, not a writable file.
    let err = write_document(temp_dir.path(), "content").unwrap_err();
    match err {
        Error::Storage(_) => (),
        _ => panic!("Expected Storage variant"),
    }
}

#[test]
fn test_write_with_missing_parent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("README.md");

    assert!(write_document(&path, "content").is_err());
}
