//! Integration tests for name and content sensitivity

use super::test_utils::{expected, sample_tree, write_tree};
use std::fs;
use tempfile::TempDir;
use treehash::tree::hasher;
use treehash::{compute_directory_hash, compute_file_hash, HashMode};

fn root_digest(root: &std::path::Path) -> [u8; 16] {
    compute_directory_hash(root, HashMode::Sequential).unwrap()
}

/// Renaming a nested file changes the file, its parent, and the root
#[test]
fn test_rename_file_changes_ancestors() {
    let (_temp_dir, root) = sample_tree();
    let sub = root.join("sub");

    let root_before = root_digest(&root);
    let sub_before = root_digest(&sub);
    let file_before = compute_file_hash(sub.join("c.txt")).unwrap();

    fs::rename(sub.join("c.txt"), sub.join("d.txt")).unwrap();

    assert_ne!(compute_file_hash(sub.join("d.txt")).unwrap(), file_before);
    assert_ne!(root_digest(&sub), sub_before);
    assert_ne!(root_digest(&root), root_before);
}

/// Renaming a directory changes the root even with identical contents
#[test]
fn test_rename_directory_changes_root() {
    let (_temp_dir, root) = sample_tree();
    let before = root_digest(&root);

    fs::rename(root.join("sub"), root.join("sub2")).unwrap();
    assert_ne!(root_digest(&root), before);
}

/// Renaming the root itself changes its digest
#[test]
fn test_root_name_is_hashed() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    write_tree(&first, &[("a.txt", b"Alpha")]);
    write_tree(&second, &[("a.txt", b"Alpha")]);

    assert_ne!(root_digest(&first), root_digest(&second));
}

/// Changing a single byte changes the file and every ancestor
#[test]
fn test_single_byte_change() {
    let (_temp_dir, root) = sample_tree();
    let sub = root.join("sub");
    let root_before = root_digest(&root);
    let sub_before = root_digest(&sub);

    fs::write(sub.join("c.txt"), "Gamme").unwrap();

    assert_eq!(
        compute_file_hash(sub.join("c.txt")).unwrap(),
        expected(&[b"c.txt", b"Gamme"])
    );
    assert_ne!(root_digest(&sub), sub_before);
    assert_ne!(root_digest(&root), root_before);
}

/// Adding an empty directory changes the parent digest
#[test]
fn test_empty_directory_addition_changes_root() {
    let (_temp_dir, root) = sample_tree();
    let before = root_digest(&root);

    fs::create_dir(root.join("empty")).unwrap();
    assert_ne!(root_digest(&root), before);
}

/// Same child digests in a different name order produce a different parent digest
#[test]
fn test_combination_is_order_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("one").join("dir");
    let second = temp_dir.path().join("two").join("dir");

    // Same names, swapped contents
    write_tree(&first, &[("a", b"1"), ("b", b"2")]);
    write_tree(&second, &[("a", b"2"), ("b", b"1")]);

    let a1 = hasher::file_digest("a", b"1");
    let b2 = hasher::file_digest("b", b"2");
    assert_eq!(root_digest(&first), hasher::directory_digest("dir", &[a1, b2]));
    assert_ne!(root_digest(&first), root_digest(&second));
    assert_ne!(
        hasher::directory_digest("dir", &[a1, b2]),
        hasher::directory_digest("dir", &[b2, a1])
    );
}

/// Moving content between files keeps total bytes but changes the digest
#[test]
fn test_content_boundary_matters() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("one").join("dir");
    let second = temp_dir.path().join("two").join("dir");
    write_tree(&first, &[("a", b"xy"), ("b", b"z")]);
    write_tree(&second, &[("a", b"x"), ("b", b"yz")]);

    assert_ne!(root_digest(&first), root_digest(&second));
}
