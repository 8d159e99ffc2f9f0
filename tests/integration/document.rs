use anyhow::Result;
use inidoc::{Document, Error, Escaping};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_load() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("app.ini");

    let mut document = Document::new();
    document.global_section_mut().set("a", "1");
    document.get_or_create_section("S").set("b", "2");
    document.save_to_path(&path)?;

    let loaded = Document::load_from_path(&path)?;
    assert_eq!(loaded.global_section().get("a"), "1");
    assert_eq!(loaded.section("S").map(|s| s.get("b")), Some("2"));
    assert_eq!(loaded, document);

    dir.close()?;
    Ok(())
}

#[test]
fn test_save_overwrites_existing_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("app.ini");
    fs::write(&path, "stale = yes\n[old]\n")?;

    let mut document = Document::new();
    document.get_or_create_section("new").set("k", "v");
    document.save_to_path(&path)?;

    assert_eq!(fs::read_to_string(&path)?, "[new]\nk = v\n");
    Ok(())
}

#[test]
fn test_blank_save_path_is_rejected() -> Result<()> {
    let document = Document::parse("a = 1");

    for path in ["", "   ", "\t"] {
        let err = document.save_to_path(path).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "path {path:?}");
    }
    Ok(())
}

#[test]
fn test_save_into_missing_directory_is_io_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing").join("app.ini");

    let err = Document::new().save_to_path(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("app.ini"));
    Ok(())
}

#[test]
fn test_load_missing_file() -> Result<()> {
    let dir = tempdir()?;
    let err = Document::load_from_path(dir.path().join("nope.ini")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    Ok(())
}

#[test]
fn test_load_without_escaping() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("raw.ini");
    fs::write(&path, "[paths]\r\nhome = C:\\Users\\me\r\n")?;

    let raw = Document::load_from_path_with(&path, Escaping::None)?;
    assert_eq!(raw.section("paths").unwrap().get("home"), "C:\\Users\\me");

    let decoded = Document::load_from_path(&path)?;
    assert_eq!(decoded.section("paths").unwrap().get("home"), "C:\\Users\\me");
    Ok(())
}

#[test]
fn test_display_and_from_str() {
    let document: Document = "[S]\nk=v".parse().unwrap();
    assert_eq!(document.to_string(), "[S]\nk = v\n");
}
