//! Snapshot tests for CLI output using insta.
//!
//! These tests capture the user-facing output of the commands as inline
//! snapshots, making it easy to review changes to what users see.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

#[allow(dead_code)]
mod common;
use common::payloads;
use common::TestFixture;

/// Normalize version-dependent parts and trailing whitespace for stable snapshots
fn normalize_output(output: &str) -> String {
    let re = regex::Regex::new(r"orgunit-tree \d+\.\d+\.\d+").unwrap();
    let versioned = re.replace_all(output, "orgunit-tree [VERSION]");
    versioned
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(fixture: &TestFixture, args: &[&str]) -> String {
    let output = fixture
        .command()
        .args(args)
        .output()
        .expect("Failed to execute command");
    normalize_output(&String::from_utf8_lossy(&output.stdout))
}

#[test]
fn test_version_snapshot() {
    let fixture = TestFixture::new();
    insta::assert_snapshot!(run(&fixture, &["--version"]), @"orgunit-tree [VERSION]");
}

#[test]
fn test_flatten_text_snapshot() {
    let fixture = TestFixture::new().with_tree(payloads::COUNTRY);
    insta::assert_snapshot!(run(&fixture, &["flatten", "--tree", "tree.json"]), @r"
    1 Country
      2 Region
        3 District
        4 Health Area
      5 Facility
    ");
}

#[test]
fn test_flatten_forest_snapshot() {
    let fixture = TestFixture::new().with_tree(payloads::FOREST);
    insta::assert_snapshot!(run(&fixture, &["flatten", "--tree", "tree.json", "--forest"]), @r"
    10 North
      11 Clinic A
    20 South
      21 Clinic B
    ");
}

#[test]
fn test_resolve_text_snapshot() {
    let fixture = TestFixture::new().with_input(payloads::RESOLVE_VERSION);
    insta::assert_snapshot!(run(&fixture, &["resolve", "--input", "input.yaml"]), @r"
    scope: version
    status fields: NEW, VALID, REJECTED
    fetching: no
    source: Pyramid (9)
    version: 3 - Q1 (Default) [id 5]
    ");
}

#[test]
fn test_resolve_fallback_snapshot() {
    let fixture = TestFixture::new().with_input("{}");
    insta::assert_snapshot!(run(&fixture, &["resolve", "--input", "input.yaml"]), @r"
    scope: fallback
    status fields: VALID
    fetching: no
    version: -
    ");
}

#[test]
fn test_validate_output_snapshot() {
    let fixture = TestFixture::new().with_tree(payloads::COUNTRY);
    insta::assert_snapshot!(run(&fixture, &["validate", "--tree", "tree.json"]), @r"
    [SCAN] Validating hierarchy: tree.json
    [OK] Settings parsed successfully
    [OK] Payload parsed successfully

    [INFO] Hierarchy Summary:
       Roots: 1
       Nodes: 5
       Depth: 3

    [CHECK] Checking structure (max depth 64)...
    [OK] Ids are unique and depth is within limits

    [OK] Validation passed
    ");
}
