//! `.side` (JSON) recording parsing.
//!
//! The JSON format carries a pool of tests plus suites referencing them by
//! id. One suite is selected per conversion; its tests are resolved in
//! suite order.

use std::collections::HashMap;

use serde::Deserialize;

use super::{ParsedDocument, RecordedStep, TestCase};
use crate::error::{ConvertError, ConvertResult};

#[derive(Debug, Deserialize)]
struct SideDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    tests: Vec<SideTest>,
    #[serde(default)]
    suites: Vec<SideSuite>,
}

#[derive(Debug, Deserialize)]
struct SideTest {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    commands: Vec<SideCommand>,
}

#[derive(Debug, Deserialize)]
struct SideCommand {
    #[serde(default)]
    command: String,
    #[serde(default)]
    target: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    comment: String,
}

#[derive(Debug, Deserialize)]
struct SideSuite {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tests: Vec<String>,
}

/// Parse a `.side` JSON document, selecting a suite by id or name.
///
/// With no reference the first suite is taken; a document without suites
/// yields its tests in pool order.
///
/// # Errors
///
/// Fails on malformed JSON, a missing suite reference, or a suite entry
/// pointing at no known test.
pub fn parse_side(json: &str, suite_reference: Option<&str>) -> ConvertResult<ParsedDocument> {
    let document: SideDocument = serde_json::from_str(json)?;

    let by_id: HashMap<&str, &SideTest> = document
        .tests
        .iter()
        .map(|t| (t.id.as_str(), t))
        .collect();

    let (title, selected): (String, Vec<&SideTest>) = match suite_reference {
        Some(reference) => {
            let suite = document
                .suites
                .iter()
                .find(|s| s.id == reference || s.name == reference)
                .ok_or_else(|| {
                    ConvertError::parse("JSON", format!("test suite '{reference}' not found"))
                })?;
            (suite.name.clone(), resolve_suite(suite, &by_id)?)
        }
        None => match document.suites.first() {
            Some(suite) => (suite.name.clone(), resolve_suite(suite, &by_id)?),
            None => (document.name.clone(), document.tests.iter().collect()),
        },
    };

    let cases = selected
        .into_iter()
        .map(|test| TestCase {
            name: test.name.trim().to_string(),
            steps: steps_of(test),
        })
        .collect();

    Ok(ParsedDocument {
        test_url: document
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(ToString::to_string),
        title: Some(title).filter(|t| !t.is_empty()),
        cases,
    })
}

fn resolve_suite<'a>(
    suite: &SideSuite,
    by_id: &HashMap<&str, &'a SideTest>,
) -> ConvertResult<Vec<&'a SideTest>> {
    suite
        .tests
        .iter()
        .map(|reference| {
            by_id.get(reference.as_str()).copied().ok_or_else(|| {
                ConvertError::parse(
                    "JSON",
                    format!(
                        "suite '{}' references unknown test '{reference}'",
                        suite.name
                    ),
                )
            })
        })
        .collect()
}

fn steps_of(test: &SideTest) -> Vec<RecordedStep> {
    let mut steps = Vec::new();
    let mut screen_capture = 1;
    for command in &test.commands {
        let name = command.command.trim();
        if !name.is_empty() {
            steps.push(RecordedStep {
                command: name.to_string(),
                target: command.target.trim().to_string(),
                value: command.value.trim().to_string(),
            });
        }
        // The recorder dropped the screenshot command but scripts mark it
        // in the step comment; reconstruct it.
        if command.comment.trim() == "captureEntirePageScreenshot" {
            let target = if command.target.trim().is_empty() {
                format!(
                    "${{VAR_FILEPATH}}/{}_{screen_capture}.uat.tc.png",
                    super::sanitize_test_name(test.name.trim())
                )
            } else {
                command.target.trim().to_string()
            };
            steps.push(RecordedStep {
                command: "captureEntirePageScreenshot".to_string(),
                target,
                value: String::new(),
            });
            screen_capture += 1;
        }
    }
    steps
}
