/*!
 * Tests for file utility functions and file resolution
 */

use anyhow::Result;
use std::path::PathBuf;
use subjoin::errors::SubtitleError;
use subjoin::file_utils::{FileManager, FileResolver, SortMode};
use crate::common;

fn folder_with_abc() -> Result<tempfile::TempDir> {
    let temp_dir = common::create_temp_dir()?;
    for name in ["c.srt", "a.srt", "b.srt", "notes.txt"] {
        common::create_test_file(temp_dir.path(), name, "")?;
    }
    Ok(temp_dir)
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test glob expansion in ascending order
#[test]
fn test_resolve_withGlobAsc_shouldSortAscending() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "*.srt", SortMode::Asc)?;

    assert_eq!(file_names(&paths), vec!["a.srt", "b.srt", "c.srt"]);
    assert!(paths.iter().all(|p| p.starts_with(temp_dir.path())));
    Ok(())
}

/// Test glob expansion in descending order
#[test]
fn test_resolve_withGlobDesc_shouldSortDescending() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "*.srt", SortMode::Desc)?;

    assert_eq!(file_names(&paths), vec!["c.srt", "b.srt", "a.srt"]);
    Ok(())
}

/// Test that inferred sorting keeps a literal list in the user's order
#[test]
fn test_resolve_withLiteralListInferred_shouldKeepGivenOrder() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "b.srt,a.srt", SortMode::Inferred)?;

    assert_eq!(file_names(&paths), vec!["b.srt", "a.srt"]);
    Ok(())
}

/// Test that inferred sorting falls back to ascending once a glob is present
#[test]
fn test_resolve_withGlobInferred_shouldSortAscending() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "c.srt, *.txt ,a.srt", SortMode::Inferred)?;

    assert_eq!(file_names(&paths), vec!["a.srt", "c.srt", "notes.txt"]);
    Ok(())
}

/// Test that literal names which do not exist are skipped
#[test]
fn test_resolve_withMissingLiteral_shouldSkipIt() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "a.srt,missing.srt,c.srt", SortMode::Inferred)?;

    assert_eq!(file_names(&paths), vec!["a.srt", "c.srt"]);
    Ok(())
}

/// Test that no matches is an empty result rather than an error
#[test]
fn test_resolve_withNoMatches_shouldReturnEmpty() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let paths = FileResolver::resolve(temp_dir.path(), "*.ass", SortMode::Asc)?;

    assert!(paths.is_empty());
    Ok(())
}

/// Test missing parameters
#[test]
fn test_resolve_withBlankParameters_shouldFailWithValidation() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let err = FileResolver::resolve("", "*.srt", SortMode::Asc).unwrap_err();
    assert!(matches!(err, SubtitleError::Validation(_)));

    let err = FileResolver::resolve(temp_dir.path(), "  ", SortMode::Asc).unwrap_err();
    assert!(matches!(err, SubtitleError::Validation(_)));
    Ok(())
}

/// Test a folder that does not exist
#[test]
fn test_resolve_withMissingFolder_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("nope");

    let err = FileResolver::resolve(&missing, "*.srt", SortMode::Asc).unwrap_err();

    match err {
        SubtitleError::NotFound(path) => assert_eq!(path, missing),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

/// Test that a regular file passed as the folder is rejected
#[test]
fn test_resolve_withFileAsFolder_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = folder_with_abc()?;

    let err = FileResolver::resolve(temp_dir.path().join("a.srt"), "*.srt", SortMode::Asc).unwrap_err();

    assert!(matches!(err, SubtitleError::NotFound(_)));
    Ok(())
}
