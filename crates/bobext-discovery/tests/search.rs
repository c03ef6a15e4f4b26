use std::fs;
use std::path::{Path, PathBuf};

use bobext_discovery::{find_file, find_file_default, find_header, find_header_in, uniq};
use tempfile::TempDir;

/// Lay out a fake installation prefix with blitz headers.
fn blitz_prefix(root: &Path) -> PathBuf {
    let include = root.join("include").join("blitz");
    fs::create_dir_all(&include).unwrap();
    fs::write(include.join("array.h"), "// blitz array\n").unwrap();
    fs::write(include.join("blitz.h"), "// blitz\n").unwrap();
    root.to_path_buf()
}

#[test]
fn find_file_in_subpath() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());

    let found = find_file("array.h", &[&prefix], &["include/blitz"]);
    assert!(!found.is_empty());
    assert_eq!(found[0].file_name().unwrap(), "array.h");
}

#[test]
fn find_file_nothing_found_is_empty() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());

    assert!(find_file("missing.h", &[&prefix], &["include/blitz"]).is_empty());
    assert!(find_file("array.h", &[tmp.path().join("nope")], &[]).is_empty());
}

#[test]
fn find_file_empty_subpaths_search_roots() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("top.h"), "").unwrap();

    let found = find_file("top.h", &[tmp.path()], &[]);
    assert_eq!(found, vec![tmp.path().join("top.h")]);
    assert_eq!(found, find_file("top.h", &[tmp.path()], &[""]));
}

#[test]
fn find_header_matches_find_file() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());

    let f1 = find_file("array.h", &[&prefix], &["include/blitz"]);
    let f2 = find_header_in("blitz/array.h", &[prefix.join("include")], &[]);
    assert!(!f2.is_empty());
    assert_eq!(f2[0].file_name().unwrap(), "array.h");
    assert_eq!(f1, f2);
}

#[test]
fn name_pattern_expands_in_alphabetical_order() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());

    let found = find_file("*.h", &[&prefix], &["include/blitz"]);
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["array.h", "blitz.h"]);
}

#[test]
fn subpath_wildcards_expand() {
    let tmp = TempDir::new().unwrap();
    for dir in ["boost", "boost-1_55", "other"] {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
        fs::write(tmp.path().join(dir).join("version.hpp"), "").unwrap();
    }

    let found = find_file("version.hpp", &[tmp.path()], &["boost", "boost?*"]);
    assert_eq!(
        found,
        vec![
            tmp.path().join("boost").join("version.hpp"),
            tmp.path().join("boost-1_55").join("version.hpp"),
        ]
    );
}

#[test]
fn results_follow_root_then_subpath_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for root in [first.path(), second.path()] {
        for sub in ["a", "b"] {
            fs::create_dir_all(root.join(sub)).unwrap();
            fs::write(root.join(sub).join("x.h"), "").unwrap();
        }
    }

    let found = find_file("x.h", &[second.path(), first.path()], &["b", "a"]);
    assert_eq!(
        found,
        vec![
            second.path().join("b").join("x.h"),
            second.path().join("a").join("x.h"),
            first.path().join("b").join("x.h"),
            first.path().join("a").join("x.h"),
        ]
    );
}

#[test]
fn same_file_through_two_roots_is_kept_twice() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());
    fs::create_dir(prefix.join("blitz")).unwrap();
    fs::write(prefix.join("blitz").join("array.h"), "").unwrap();

    // `<prefix>` + `include/blitz` and `<prefix>/include` + `blitz` reach
    // the same header from two different roots.
    let roots = [prefix.clone(), prefix.join("include")];
    let found = find_file("array.h", &roots, &["include/blitz", "blitz"]);
    assert_eq!(
        found,
        vec![
            prefix.join("include").join("blitz").join("array.h"),
            prefix.join("blitz").join("array.h"),
            prefix.join("include").join("blitz").join("array.h"),
        ]
    );
    assert_eq!(uniq(found).len(), 2);
}

#[test]
fn repeated_roots_and_subpaths_are_searched_once() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("inc")).unwrap();
    fs::write(tmp.path().join("inc").join("a.h"), "").unwrap();

    let found = find_file("a.h", &[tmp.path(), tmp.path()], &["inc", "inc"]);
    assert_eq!(found, vec![tmp.path().join("inc").join("a.h")]);
}

#[test]
fn hidden_subpaths_are_not_expanded() {
    let tmp = TempDir::new().unwrap();
    for dir in ["boost", ".boost-old"] {
        fs::create_dir(tmp.path().join(dir)).unwrap();
        fs::write(tmp.path().join(dir).join("version.hpp"), "").unwrap();
    }

    let found = find_file("version.hpp", &[tmp.path()], &["*boost*"]);
    assert_eq!(found, vec![tmp.path().join("boost").join("version.hpp")]);
}

#[test]
fn directories_are_not_reported() {
    let tmp = TempDir::new().unwrap();
    let prefix = blitz_prefix(tmp.path());

    assert!(find_file("blitz", &[&prefix], &["include"]).is_empty());
}

#[test]
fn default_header_search_agrees_with_file_search() {
    // Holds on any host: both sides derive from the same prefixes.
    let f1 = find_file_default("array.h", &["include/blitz"]);
    let f2 = find_header("blitz/array.h", &[]);
    if std::env::var_os("BOBEXT_INCLUDE_PATH").is_none()
        && std::env::var_os("BOBEXT_CONFIG").is_none()
    {
        assert_eq!(f1, f2);
    }
}
