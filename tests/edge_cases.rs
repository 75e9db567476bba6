//! Edge case tests for flist


use harness::{TempTree, read_report, run_flist};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlinked_directory_not_followed() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new();
    tree.add_file("data/real/inside.txt", "i");
    symlink(tree.path().join("data/real"), tree.path().join("data/link"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success);
    // inside.txt is reached through the real directory only
    assert!(stdout.contains("Total number of files: 1"), "stdout: {}", stdout);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_listed() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new();
    tree.add_file("data/target.txt", "t");
    symlink(
        tree.path().join("data/target.txt"),
        tree.path().join("data/alias.txt"),
    )
    .expect("Failed to create file symlink");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success);
    assert!(stdout.contains("Total number of files: 2"));

    let report = read_report(tree.path(), "listing.txt");
    assert!(report.contains("alias.txt"));
    assert!(report.contains("target.txt"));
}

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_does_not_hang() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new();
    tree.add_file("data/sub/file.txt", "f");
    symlink("..", tree.path().join("data/sub/parent")).expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success, "flist should not hang on a cyclic symlink");
    assert!(stdout.contains("Total number of files: 1"));
}

// ============================================================================
// Name Edge Cases
// ============================================================================

#[test]
fn test_unicode_file_names_survive_both_formats() {
    let tree = TempTree::new();
    tree.add_file("data/naïve résumé.txt", "u");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success);
    assert!(stdout.contains("Total number of files: 1"));
    let report = read_report(tree.path(), "listing.txt");
    assert!(report.contains("naïve résumé.txt"));

    let (_stdout, _stderr, success) = run_flist(
        tree.path(),
        &["data", "-o", "listing.html", "--format", "html"],
    );
    assert!(success);
    let html = read_report(tree.path(), "listing.html");
    assert!(html.contains("naïve résumé.txt"));
    // the href is fully percent-encoded
    assert!(html.contains("na%C3%AFve%20r%C3%A9sum%C3%A9.txt"), "html: {}", html);
}

#[test]
fn test_extension_argument_without_dot() {
    let tree = TempTree::new();
    tree.add_file("data/script.py", "p");
    tree.add_file("data/readme.md", "m");

    let (stdout, _stderr, success) = run_flist(
        tree.path(),
        &["data", "-o", "listing.txt", "-e", "py"],
    );
    assert!(success);
    assert!(stdout.contains("Total number of files: 1"));
}

#[test]
fn test_file_without_extension_rejected_by_filter() {
    let tree = TempTree::new();
    tree.add_file("data/Makefile", "all:");
    tree.add_file("data/build.sh", "#!/bin/sh");

    let (stdout, _stderr, success) = run_flist(
        tree.path(),
        &["data", "-o", "listing.txt", "-e", ".sh"],
    );
    assert!(success);
    assert!(stdout.contains("Total number of files: 1"));
}

// ============================================================================
// Tree Shape Edge Cases
// ============================================================================

#[test]
fn test_empty_root_yields_empty_report() {
    let tree = TempTree::new();
    tree.add_dir("data");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success);
    assert!(stdout.contains("Total number of files: 0"));
}

#[test]
fn test_deeply_nested_tree() {
    let tree = TempTree::new();
    tree.add_file("data/a/b/c/d/e/f/g/deep.txt", "d");

    let (stdout, _stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);
    assert!(success);
    assert!(stdout.contains("Total number of files: 1"));

    let (stdout, _stderr, success) = run_flist(
        tree.path(),
        &["data", "-o", "listing.txt", "--depth", "3"],
    );
    assert!(success);
    assert!(stdout.contains("Total number of files: 0"));
}

#[test]
fn test_hidden_directory_pruned_not_just_hidden_files() {
    let tree = TempTree::new();
    tree.add_file("data/.cache/blob.bin", "b");
    tree.add_file("data/kept.txt", "k");

    let (stdout, _stderr, success) = run_flist(
        tree.path(),
        &["data", "-o", "listing.txt", "--skip-hidden"],
    );
    assert!(success);
    assert!(stdout.contains("Total number of files: 1"));

    let report = read_report(tree.path(), "listing.txt");
    assert!(!report.contains("blob.bin"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_warns_but_scan_succeeds() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TempTree::new();
    tree.add_file("data/ok.txt", "ok");
    let locked = tree.add_dir("data/locked");
    tree.add_file("data/locked/secret.txt", "s");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("Failed to chmod");

    // Running as root the chmod has no effect; nothing to test then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod back");
        return;
    }

    let (stdout, stderr, success) = run_flist(tree.path(), &["data", "-o", "listing.txt"]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod back");

    assert!(success, "permission error must not abort the scan");
    assert!(stdout.contains("Total number of files: 1"));
    assert!(
        stderr.contains("warning") && stderr.contains("locked"),
        "stderr: {}",
        stderr
    );
}
