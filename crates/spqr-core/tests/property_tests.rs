//! Property-based tests for path containment.

#![allow(clippy::expect_used)]

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use proptest::prelude::*;
use spqr_core::security::is_within;
use spqr_core::security::normalize_path;
use spqr_core::types::DestDir;
use spqr_core::types::SafePath;
use tempfile::TempDir;

fn create_test_dest() -> (TempDir, DestDir) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let dest = DestDir::new(temp.path()).expect("failed to create dest");
    (temp, dest)
}

proptest! {
    /// Plain relative names always resolve inside the root.
    #[test]
    fn prop_plain_relative_paths_accepted(
        components in prop::collection::vec("[a-zA-Z0-9_-]{1,20}", 1..6)
    ) {
        let (_temp, dest) = create_test_dest();
        let entry = components.join("/");
        let safe = SafePath::validate(&entry, &dest);
        prop_assert!(safe.is_ok(), "{entry} rejected");
        prop_assert!(dest.join(&safe.expect("checked")).starts_with(dest.as_path()));
    }

    /// More `..` than preceding components always escapes.
    #[test]
    fn prop_excess_parents_rejected(
        components in prop::collection::vec("[a-z]{1,8}", 0..4),
        extra in 1usize..4,
        tail in "[a-z]{1,8}",
    ) {
        let (_temp, dest) = create_test_dest();
        let mut parts = components.clone();
        parts.extend(std::iter::repeat_n("..".to_string(), components.len() + extra));
        parts.push(tail);
        let entry = parts.join("/");
        prop_assert!(SafePath::validate(&entry, &dest).is_err(), "{entry} accepted");
    }

    /// Normalized paths contain no `.` or `..` below an absolute root.
    #[test]
    fn prop_normalize_removes_dot_components(
        parts in prop::collection::vec(prop_oneof!["[a-z]{1,5}", Just(".".to_string()), Just("..".to_string())], 0..10)
    ) {
        let path = PathBuf::from("/root").join(parts.join("/"));
        let normalized = normalize_path(&path);
        let clean = normalized
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir));
        prop_assert!(clean, "{} still has dot components", normalized.display());
    }

    /// A sibling sharing the root's name as a prefix is never inside it.
    #[test]
    fn prop_prefix_sibling_is_outside(
        root in "[a-z]{1,8}",
        suffix in "[a-z0-9]{1,4}",
        file in "[a-z]{1,8}",
    ) {
        let root_path = Path::new("/base").join(&root);
        let sibling = Path::new("/base").join(format!("{root}{suffix}")).join(file);
        prop_assert!(!is_within(&sibling, &root_path));
    }

    /// Anything joined below the root stays inside after normalization.
    #[test]
    fn prop_children_are_inside(
        components in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let root = Path::new("/base/root");
        let child = normalize_path(&root.join(components.join("/")));
        prop_assert!(is_within(&child, root));
    }
}
