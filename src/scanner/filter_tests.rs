use std::path::Path;

use super::*;

fn pine() -> Vec<String> {
    vec!["pine".to_string()]
}

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(pine(), &[]).unwrap();

    assert!(filter.should_include(Path::new("strategies/breakout.pine")));
    assert!(!filter.should_include(Path::new("strategies/breakout.py")));
    assert!(!filter.should_include(Path::new("README")));
}

#[test]
fn filter_accepts_dotted_extension() {
    let filter = GlobFilter::new(vec![".pine".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("a.pine")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = GlobFilter::new(vec!["pine".to_string(), "pinescript".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("a.pine")));
    assert!(filter.should_include(Path::new("a.pinescript")));
    assert!(!filter.should_include(Path::new("a.txt")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("a.pine")));
    assert!(filter.should_include(Path::new("notes.txt")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        pine(),
        &["**/node_modules/**".to_string(), "**/archive/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main.pine")));
    assert!(!filter.should_include(Path::new("node_modules/pkg/lib.pine")));
    assert!(!filter.should_include(Path::new("src/archive/old.pine")));
}

#[test]
fn filter_exclude_matches_dot_prefixed_paths() {
    let filter = GlobFilter::new(pine(), &["legacy/**".to_string()]).unwrap();

    assert!(!filter.should_include(Path::new("./legacy/v4.pine")));
    assert!(filter.should_include(Path::new("./current/v6.pine")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(pine(), &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(crate::PineGuardError::InvalidPattern { .. })
    ));
}
