//! Integration tests for the liftoff binary


use harness::{liftoff, TestTree};
use predicates::prelude::*;

#[test]
fn test_help() {
    let tree = TestTree::new();
    liftoff(&tree, &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bump"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn test_a_command_is_required() {
    let tree = TestTree::new();
    liftoff(&tree, &[]).assert().failure();
}

#[test]
fn test_invalid_bump_type_fails_before_the_walk() {
    let tree = TestTree::new();
    tree.add_package("alpha");

    liftoff(&tree, &["bump", "--bump-type", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bump type"));
}

#[test]
fn test_list_discovers_nested_packages() {
    let tree = TestTree::new();
    tree.add_package("alpha");
    tree.add_package("group/gamma");
    tree.add_package("node_modules/left-pad");

    liftoff(&tree, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("gamma"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("2 package(s) found"));
}

#[test]
fn test_list_with_exclude() {
    let tree = TestTree::new();
    tree.add_package("alpha");
    tree.add_package("group/gamma");

    liftoff(&tree, &["list", "--exclude", "group"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("gamma").not());
}

#[test]
fn test_list_include_overrides_implicit_exclude() {
    let tree = TestTree::new();
    tree.add_package("alpha");
    tree.add_package("node_modules");

    liftoff(&tree, &["list", "--include", "node_modules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn test_list_json_output() {
    let tree = TestTree::new();
    tree.add_package("alpha");
    tree.add_dir("empty");

    let output = liftoff(&tree, &["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let packages: serde_json::Value =
        serde_json::from_slice(&output).expect("list --format json should emit valid JSON");
    let packages = packages.as_array().expect("expected a JSON array");

    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["name"], "alpha");
}

#[test]
fn test_context_runs_in_sub_directory() {
    let tree = TestTree::new();
    tree.add_package("alpha");
    tree.add_package("sub/beta");

    liftoff(&tree, &["--context", "sub", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn test_missing_context_is_an_error() {
    let tree = TestTree::new();

    liftoff(&tree, &["--context", "missing", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context directory not found"));
}

#[cfg(unix)]
mod fake_npm {
    use super::harness::{liftoff, with_fake_npm, TestTree};
    use predicates::prelude::*;

    const HAPPY_NPM: &str = r#"
case "$1" in
  version) echo "v9.9.9" ;;
  publish) echo "+ published" ;;
  *) exit 1 ;;
esac
"#;

    const BROKEN_VERSION_NPM: &str = r#"
case "$1" in
  version) echo "npm ERR! version failed" >&2; exit 1 ;;
  publish) echo "+ published" ;;
  *) exit 1 ;;
esac
"#;

    #[test]
    fn test_bump_reports_each_package() {
        let tree = TestTree::new();
        tree.add_package("alpha");
        tree.add_package("group/gamma");

        let mut cmd = liftoff(&tree, &["bump"]);
        with_fake_npm(&mut cmd, &tree, HAPPY_NPM);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Bumped alpha to v9.9.9"))
            .stdout(predicate::str::contains("Bumped gamma to v9.9.9"));
    }

    #[test]
    fn test_both_bumps_then_publishes() {
        let tree = TestTree::new();
        tree.add_package("alpha");

        let mut cmd = liftoff(&tree, &["both"]);
        with_fake_npm(&mut cmd, &tree, HAPPY_NPM);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Bumped alpha to v9.9.9"))
            .stdout(predicate::str::contains("Published alpha"));
    }

    #[test]
    fn test_failed_bump_skips_publish_but_exits_zero() {
        let tree = TestTree::new();
        tree.add_package("alpha");

        let mut cmd = liftoff(&tree, &["both"]);
        with_fake_npm(&mut cmd, &tree, BROKEN_VERSION_NPM);

        // Per-package failures are reported but never change the exit code
        cmd.assert()
            .success()
            .stderr(predicate::str::contains("Bump failed alpha"))
            .stdout(predicate::str::contains("Published").not());
    }

    #[test]
    fn test_private_package_is_skipped_on_publish() {
        let tree = TestTree::new();
        let dir = tree.add_package("internal");
        std::fs::write(
            dir.join("package.json"),
            r#"{"name": "internal", "version": "1.0.0", "private": true}"#,
        )
        .unwrap();

        let mut cmd = liftoff(&tree, &["publish"]);
        with_fake_npm(&mut cmd, &tree, HAPPY_NPM);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Skipped internal (private)"));
    }
}
