//! End-to-end tests of the `selegen` binary.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

fn selegen() -> Command {
    let mut cmd = Command::cargo_bin("selegen").unwrap();
    // Keep the user's global config out of the picture.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn script(name: &str, rows: &[(&str, &str, &str)]) -> String {
    let mut html = format!(
        "<html>\n<head>\n<title>{name}</title>\n</head>\n<body>\n<table>\n\
         <thead>\n<tr><td rowspan=\"1\" colspan=\"3\">{name}</td></tr>\n</thead><tbody>\n"
    );
    for (command, target, value) in rows {
        html.push_str(&format!(
            "<tr>\n\t<td>{command}</td>\n\t<td>{target}</td>\n\t<td>{value}</td>\n</tr>\n"
        ));
    }
    html.push_str("</tbody></table>\n</body>\n</html>\n");
    html
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_generates_tree_into_output_dir() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        input.path(),
        "forum/Test_Topic.html",
        &script("Test_Topic", &[("open", "/portal", ""), ("clickAndWait", "link=Forum", "")]),
    );
    write(
        input.path(),
        "Test_Home.html",
        &script("Test_Home", &[("open", "/portal", "")]),
    );

    let out = selegen()
        .arg(input.path())
        .arg(output.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    insta::assert_snapshot!(stdout(&out), @"Done : 2 tests generated, 2 tests suites generated");

    let java = std::fs::read_to_string(output.path().join("forum/Test_Topic.java")).unwrap();
    assert!(java.starts_with("package forum;\n"));
    assert!(java.contains("public void testTopic() throws Exception {"));
    assert!(output.path().join("Test_Home.java").exists());
    assert!(!input.path().join("Test_Home.java").exists());
}

#[test]
fn test_output_defaults_to_input() {
    let input = TempDir::new().unwrap();
    write(
        input.path(),
        "Test_Home.html",
        &script("Test_Home", &[("open", "/portal", "")]),
    );

    selegen().arg(input.path()).assert().success();
    assert!(input.path().join("Test_Home.java").exists());
}

#[test]
fn test_failure_sets_exit_code() {
    let input = TempDir::new().unwrap();
    write(
        input.path(),
        "Test_Bad.html",
        &script("Test_Bad", &[("doesNotExist", "foo", "")]),
    );
    write(
        input.path(),
        "Test_Good.html",
        &script("Test_Good", &[("open", "/", "")]),
    );

    let out = selegen().arg(input.path()).arg("-q").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out).trim(),
        "Done : 1 tests generated, 1 tests suites generated"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Test_Bad.html"));
    assert!(stderr.contains("doesNotExist"));
    assert!(input.path().join("Test_Good.java").exists());
}

#[test]
fn test_webdriver_variant_from_flag() {
    let input = TempDir::new().unwrap();
    write(
        input.path(),
        "Test_Home.html",
        &script("Test_Home", &[("click", "id=menu", "")]),
    );

    selegen()
        .arg(input.path())
        .args(["--variant", "webdriver", "--package-prefix", "org.exoplatform"])
        .assert()
        .success();

    let java = std::fs::read_to_string(input.path().join("Test_Home.java")).unwrap();
    assert!(java.starts_with("package org.exoplatform;\n"));
    assert!(java.contains("extends SeleneseTestBase"));
    assert!(java.contains("selenium.mouseOver(\"id=menu\");\n        selenium.click(\"id=menu\");"));
}

#[test]
fn test_unknown_variant_is_rejected() {
    let input = TempDir::new().unwrap();
    let out = selegen()
        .arg(input.path())
        .args(["--variant", "python"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown variant `python`"));
}

#[test]
fn test_project_config_is_applied() {
    let input = TempDir::new().unwrap();
    write(
        input.path(),
        ".selegen/config.toml",
        "[runtime]\nbrowser = \"chrome\"\n\n[output]\nvariant = \"webdriver\"\n",
    );
    write(
        input.path(),
        "Test_Home.html",
        &script("Test_Home", &[("open", "/portal", "")]),
    );

    selegen().arg(input.path()).assert().success();
    let java = std::fs::read_to_string(input.path().join("Test_Home.java")).unwrap();
    assert!(java.contains("public String browser = \"chrome\";"));
    assert!(java.contains("@Before"));
}

#[test]
fn test_dry_run() {
    let input = TempDir::new().unwrap();
    write(
        input.path(),
        "Test_Home.html",
        &script("Test_Home", &[("open", "/portal", "")]),
    );

    let out = selegen().arg(input.path()).arg("--dry-run").output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout(&out).trim(),
        "Done : 1 tests generated, 1 tests suites generated"
    );
    assert!(!input.path().join("Test_Home.java").exists());
}

#[test]
fn test_list_commands() {
    let out = selegen().arg("--list-commands").output().unwrap();
    assert!(out.status.success());
    let listing = stdout(&out);
    let line = |name: &str| {
        listing
            .lines()
            .find(|l| l.split_whitespace().next() == Some(name))
            .map(|l| l.split_whitespace().last().unwrap_or_default().to_string())
    };
    assert_eq!(line("clickAndWait").as_deref(), Some("action"));
    assert_eq!(line("waitForElementPresent").as_deref(), Some("wait"));
    assert_eq!(line("storeText").as_deref(), Some("store"));
    assert_eq!(line("createReportKS230").as_deref(), Some("archive"));
    assert_eq!(line("TypeRandom").as_deref(), Some("user-extension"));
}

#[test]
fn test_missing_input_dir() {
    let out = selegen().arg("/nonexistent/selegen-input").output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a directory"));
}
