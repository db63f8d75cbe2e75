//! End-to-end conversion tests.

#![allow(clippy::unwrap_used)]

use sideways::{ConvertOptions, Converter, LineEnding, Template};

const LOGIN_HTML: &str = r#"<html>
<head>
<link rel="selenium.base" href="http://x" />
<title>Login</title>
</head>
<body>
<table>
<tr><td>open</td><td>http://x</td><td></td></tr>
<tr><td>type</td><td>id=user</td><td>bob</td></tr>
<tr><td>click</td><td>id=go</td><td></td></tr>
</table>
</body>
</html>"#;

#[test]
fn html_recording_assembles_in_order() {
    let converter = Converter::new(ConvertOptions::default());
    let php = converter.convert_html(LOGIN_HTML, None, None).unwrap();

    let navigate = php.find("$this->url(\"http://x\");").unwrap();
    let lookup = php.find("$input = $this->byId(\"user\", true);").unwrap();
    let clear = php.find("$input->clear();").unwrap();
    let set = php.find("$input->value(\"bob\");").unwrap();
    let click_lookup = php.find("$input = $this->byId(\"go\", true);").unwrap();
    let click = php.rfind("$input->click();").unwrap();

    assert!(navigate < lookup);
    assert!(lookup < clear);
    assert!(clear < set);
    assert!(set < click_lookup);
    assert!(click_lookup < click);

    // Base URL from the document's <link>
    assert!(php.contains("$this->setBrowserUrl(\"http://x\");"));
    assert!(php.contains("class LoginTest extends PHPUnit_Extensions_Selenium2TestCase {"));
}

#[test]
fn explicit_test_name_overrides_title() {
    let converter = Converter::new(ConvertOptions::default());
    let php = converter
        .convert_html(LOGIN_HTML, Some("Auth_login_simple"), None)
        .unwrap();
    assert!(php.contains("class Auth_login_simpleTest"));
    assert!(php.contains("function testAuth_login_simple() {"));
}

#[test]
fn duplicate_titles_disambiguate_and_depend() {
    let json = r#"{
        "name": "Shop",
        "url": "http://shop.example.com",
        "tests": [
            {"id": "a", "name": "Login Test", "commands": [{"command": "open", "target": "/", "value": ""}]},
            {"id": "b", "name": "Login Test", "commands": [{"command": "refresh", "target": "", "value": ""}]}
        ],
        "suites": [{"id": "s", "name": "Smoke", "tests": ["a", "b"]}]
    }"#;
    let converter = Converter::new(ConvertOptions::default());
    let php = converter.convert_side(json, None).unwrap();

    assert!(php.contains("function testLogin_Test() {"));
    assert!(php.contains("function testLogin_Test001() {"));
    let depends = php.find("* @depends testLogin_Test\n").unwrap();
    let second = php.find("function testLogin_Test001()").unwrap();
    assert!(depends < second);
}

#[test]
fn suite_selection_by_name() {
    let json = r#"{
        "tests": [
            {"id": "a", "name": "A", "commands": [{"command": "open", "target": "/", "value": ""}]},
            {"id": "b", "name": "B", "commands": [{"command": "open", "target": "/b", "value": ""}]}
        ],
        "suites": [
            {"id": "s1", "name": "First", "tests": ["a"]},
            {"id": "s2", "name": "Second", "tests": ["b"]}
        ]
    }"#;
    let mut opts = ConvertOptions::default();
    opts.suite_reference = Some("Second".to_string());
    let php = Converter::new(opts).convert_side(json, None).unwrap();
    assert!(php.contains("function testB() {"));
    assert!(!php.contains("function testA() {"));
    assert!(php.contains("class SecondTest"));
}

#[test]
fn single_test_flag_truncates() {
    let json = r#"{
        "tests": [
            {"id": "a", "name": "A", "commands": [{"command": "open", "target": "/", "value": ""}]},
            {"id": "b", "name": "B", "commands": [{"command": "open", "target": "/b", "value": ""}]}
        ],
        "suites": [{"id": "s", "name": "S", "tests": ["a", "b"]}]
    }"#;
    let mut opts = ConvertOptions::default();
    opts.single_test = true;
    let php = Converter::new(opts).convert_side(json, None).unwrap();
    assert!(php.contains("function testA() {"));
    assert!(!php.contains("function testB() {"));
}

#[test]
fn unknown_selector_aborts_whole_conversion() {
    let html = r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>click</td><td>data-qa=go</td><td></td></tr>
</table></body></html>"#;
    let converter = Converter::new(ConvertOptions::default());
    assert!(converter.convert_html(html, None, None).is_err());
}

#[test]
fn unknown_command_survives_conversion() {
    let html = r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>windowMaximize</td><td></td><td></td></tr>
<tr><td>open</td><td>/</td><td></td></tr>
</table></body></html>"#;
    let converter = Converter::new(ConvertOptions::default());
    let php = converter.convert_html(html, None, None).unwrap();
    assert!(php.contains("//$this->windowMaximize();"));
    assert!(php.contains("$this->url(\"/\");"));
}

#[test]
fn unsupported_browser_aborts() {
    let mut opts = ConvertOptions::default();
    opts.browsers = Some("netscape".to_string());
    let converter = Converter::new(opts);
    let err = converter.convert_html(LOGIN_HTML, None, None).unwrap_err();
    assert!(err.to_string().contains("netscape"));
}

#[test]
fn template_mode_splices_placeholders() {
    let template = Template::from_content(
        "<?php\n{$comment}\nclass {$className} extends Base {\n    public function {$testMethodName}() {\n        {$testMethodContent}\n    }\n}\n",
    );
    let converter = Converter::new(ConvertOptions::default());
    let php = converter
        .convert_html(LOGIN_HTML, None, Some(&template))
        .unwrap();
    assert!(php.contains("class LoginTest extends Base {"));
    assert!(php.contains("public function testLogin() {"));
    assert!(php.contains("$this->url(\"http://x\");"));
    assert!(php.contains("Autogenerated from Selenium HTML test case by sideways."));
    // No leftover placeholders
    assert!(!php.contains("{$"));
}

#[test]
fn crlf_line_terminator() {
    let converter =
        Converter::new(ConvertOptions::default().with_eol(LineEnding::CrLf));
    let php = converter.convert_html(LOGIN_HTML, None, None).unwrap();
    assert!(php.contains("\r\n"));
    assert!(!php.replace("\r\n", "").contains('\r'));
}

#[test]
fn screenshots_on_every_step_number_sequentially() {
    let html = r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>open</td><td>/a</td><td></td></tr>
<tr><td>open</td><td>/b</td><td></td></tr>
</table></body></html>"#;
    let converter = Converter::new(
        ConvertOptions::default().with_screenshots_on_every_step(true),
    );
    let php = converter.convert_html(html, None, None).unwrap();
    assert!(php.contains("$this->takeScreenshot(\"step-1\");"));
    assert!(php.contains("$this->takeScreenshot(\"step-2\");"));
}

#[test]
fn sessions_do_not_leak_between_conversions() {
    let converter = Converter::new(
        ConvertOptions::default().with_screenshots_on_every_step(true),
    );
    let first = converter.convert_html(LOGIN_HTML, None, None).unwrap();
    let second = converter.convert_html(LOGIN_HTML, None, None).unwrap();
    // Same step numbering and no method-name ordinal carried over
    assert!(second.contains("$this->takeScreenshot(\"step-1\");"));
    assert!(second.contains("function testLogin() {"));
    assert_eq!(
        first.contains("function testLogin001()"),
        second.contains("function testLogin001()")
    );
}

#[test]
fn variable_tokens_flow_to_output() {
    let html = r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>type</td><td>id=user</td><td>pre ${x} mid ${y} post</td></tr>
</table></body></html>"#;
    let converter = Converter::new(ConvertOptions::default());
    let php = converter.convert_html(html, None, None).unwrap();
    assert!(php.contains(
        "$input->value(\"pre \" . $this->getStoredValue(\"x\") . \" mid \" . $this->getStoredValue(\"y\") . \" post\");"
    ));
}

#[test]
fn wait_for_element_not_present_shape() {
    let html = r#"<html><head><link href="http://x"/><title>T</title></head><body><table>
<tr><td>waitForElementPresent</td><td>id=ready</td><td></td></tr>
<tr><td>waitForElementNotPresent</td><td>id=spinner</td><td></td></tr>
</table></body></html>"#;
    let converter = Converter::new(ConvertOptions::default());
    let php = converter.convert_html(html, None, None).unwrap();
    assert!(php.contains("$this->waitUntil(function($testCase) {"));
    assert!(php.contains("$testCase->byId(\"spinner\");"));
    assert!(php.contains("NoSuchElement == $e->getCode()"));
    assert!(php.contains("throw $e;"));
    assert!(php.contains("}, 30000);"));
}
