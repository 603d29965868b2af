//! Integration tests for tree hashing determinism

use super::test_utils::{sample_tree, sample_tree_digest, write_tree};
use std::fs;
use tempfile::TempDir;
use treehash::tree::TreeHasher;
use treehash::{compute_directory_hash, HashMode};

/// Test that the same filesystem produces the same root digest
#[test]
fn test_same_filesystem_same_root() {
    let (_temp_dir, root) = sample_tree();

    let tree = TreeHasher::new(root);
    let first = tree.compute(HashMode::Sequential).unwrap();
    let second = tree.compute(HashMode::Sequential).unwrap();
    let third = tree.compute(HashMode::Concurrent).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

/// Creation order of siblings does not matter
#[test]
fn test_creation_order_independent() {
    let temp_dir = TempDir::new().unwrap();
    let forward = temp_dir.path().join("one").join("root");
    let backward = temp_dir.path().join("two").join("root");

    write_tree(
        &forward,
        &[
            ("a.txt", b"Alpha"),
            ("b.txt", b"Beta"),
            ("sub/c.txt", b"Gamma"),
        ],
    );
    write_tree(
        &backward,
        &[
            ("sub/c.txt", b"Gamma"),
            ("b.txt", b"Beta"),
            ("a.txt", b"Alpha"),
        ],
    );

    let want = sample_tree_digest();
    for mode in [HashMode::Sequential, HashMode::Concurrent] {
        assert_eq!(compute_directory_hash(&forward, mode).unwrap(), want);
        assert_eq!(compute_directory_hash(&backward, mode).unwrap(), want);
    }
}

/// Only base names are hashed, so the parent location is irrelevant
#[test]
fn test_location_independent() {
    let (_temp_dir, root) = sample_tree();
    let other_dir = TempDir::new().unwrap();
    let moved = other_dir.path().join("deeply").join("nested").join("root");
    fs::create_dir_all(moved.parent().unwrap()).unwrap();
    fs::rename(&root, &moved).unwrap_or_else(|_| {
        // Cross-device rename: rebuild the same tree instead
        write_tree(
            &moved,
            &[
                ("a.txt", b"Alpha"),
                ("b.txt", b"Beta"),
                ("sub/c.txt", b"Gamma"),
            ],
        );
    });

    assert_eq!(
        compute_directory_hash(&moved, HashMode::Sequential).unwrap(),
        sample_tree_digest()
    );
}

/// Appending zero bytes leaves every digest unchanged
#[test]
fn test_zero_byte_append_is_noop() {
    use std::io::Write;

    let (_temp_dir, root) = sample_tree();
    let before = compute_directory_hash(&root, HashMode::Sequential).unwrap();

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(root.join("sub").join("c.txt"))
        .unwrap();
    file.write_all(b"").unwrap();
    file.sync_all().unwrap();
    drop(file);

    assert_eq!(
        compute_directory_hash(&root, HashMode::Sequential).unwrap(),
        before
    );
    assert_eq!(
        compute_directory_hash(&root, HashMode::Concurrent).unwrap(),
        before
    );
}
