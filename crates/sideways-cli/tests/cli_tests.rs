//! CLI integration tests.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const RECORDING: &str = r#"<html>
<head>
<link rel="selenium.base" href="http://example.com/" />
<title>Login</title>
</head>
<body>
<table>
<tr><td>open</td><td>/</td><td></td></tr>
<tr><td>type</td><td>id=user</td><td>bob</td></tr>
<tr><td>click</td><td>id=go</td><td></td></tr>
</table>
</body>
</html>"#;

fn sideways() -> Command {
    Command::cargo_bin("sideways").unwrap()
}

#[test]
fn converts_single_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    fs::write(&input, RECORDING).unwrap();

    sideways().arg(&input).assert().success();

    let output = dir.path().join("LoginTest.php");
    let php = fs::read_to_string(output).unwrap();
    assert!(php.starts_with("<?php"));
    assert!(php.contains("$this->url(\"/\");"));
    assert!(php.contains("$input = $this->byId(\"user\", true);"));
    assert!(php.contains("class LoginTest extends PHPUnit_Extensions_Selenium2TestCase {"));
}

#[test]
fn explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    let output = dir.path().join("custom.php");
    fs::write(&input, RECORDING).unwrap();

    sideways().arg(&input).arg(&output).assert().success();
    assert!(output.exists());
}

#[test]
fn converts_side_suite() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("shop.side");
    fs::write(
        &input,
        r#"{
            "name": "Shop",
            "url": "http://shop.example.com",
            "tests": [
                {"id": "a", "name": "Login", "commands": [{"command": "open", "target": "/", "value": ""}]},
                {"id": "b", "name": "Checkout", "commands": [{"command": "click", "target": "id=buy", "value": ""}]}
            ],
            "suites": [{"id": "s", "name": "Smoke", "tests": ["a", "b"]}]
        }"#,
    )
    .unwrap();

    sideways()
        .arg(&input)
        .args(["--test-suite", "Smoke"])
        .assert()
        .success();

    let php = fs::read_to_string(dir.path().join("ShopTest.php")).unwrap();
    assert!(php.contains("function testLogin() {"));
    assert!(php.contains("function testCheckout() {"));
    assert!(php.contains("* @depends testLogin"));
    assert!(php.contains("$this->setBrowserUrl(\"http://shop.example.com\");"));
}

#[test]
fn converts_directory_with_dest() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("recordings");
    let out = dir.path().join("generated");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(src.join("a.html"), RECORDING).unwrap();
    fs::write(src.join("b.html"), RECORDING).unwrap();

    sideways()
        .arg(&src)
        .arg("--dest")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("ATest.php").exists());
    assert!(out.join("BTest.php").exists());
}

#[test]
fn hash_postfix_in_filename() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    fs::write(&input, RECORDING).unwrap();

    sideways()
        .arg(&input)
        .arg("--use-hash-postfix")
        .assert()
        .success();

    let generated: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with("Test.php"))
        .collect();
    assert_eq!(generated.len(), 1);
    // Login_<8 hex chars>_Test.php
    assert!(generated[0].starts_with("Login_"));
    assert_eq!(generated[0].len(), "Login_12345678_Test.php".len());
}

#[test]
fn missing_input_fails() {
    sideways()
        .arg("no-such-file.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an existing file"));
}

#[test]
fn unknown_selector_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Bad.html");
    fs::write(
        &input,
        r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>click</td><td>data-qa=go</td><td></td></tr>
</table></body></html>"#,
    )
    .unwrap();

    sideways()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown selector"));
}

#[test]
fn missing_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    fs::write(&input, RECORDING).unwrap();

    sideways()
        .arg(&input)
        .args(["--output-tpl", "no-such-template.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not accessible"));
}

#[test]
fn template_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    let tpl = dir.path().join("tpl.php");
    fs::write(&input, RECORDING).unwrap();
    fs::write(&tpl, "<?php\n// {$className} on {$browser}\n{$testMethodContent}\n").unwrap();

    sideways()
        .arg(&input)
        .arg("--output-tpl")
        .arg(&tpl)
        .args(["--browser", "chrome"])
        .assert()
        .success();

    let php = fs::read_to_string(dir.path().join("LoginTest.php")).unwrap();
    assert!(php.contains("// LoginTest on chrome"));
    assert!(php.contains("$this->url(\"/\");"));
}

#[test]
fn unsupported_browser_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login.html");
    fs::write(&input, RECORDING).unwrap();

    sideways()
        .arg(&input)
        .args(["--browsers", "netscape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported browser"));
}

#[test]
fn help_lists_options() {
    sideways()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--browser-url"))
        .stdout(predicate::str::contains("--override-params"))
        .stdout(predicate::str::contains("--test-suite"));
}
