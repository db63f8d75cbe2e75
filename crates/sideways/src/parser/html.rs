//! Legacy HTML table export parsing.
//!
//! The old recorder exports a `<table>` of three-cell rows plus a
//! `<link rel="selenium.base">` carrying the base URL and a `<title>`
//! naming the case.

use scraper::{ElementRef, Html, Node, Selector};

use super::{ParsedDocument, RecordedStep, TestCase};
use crate::error::{ConvertError, ConvertResult};

/// Parse an HTML recording into a single-case document.
///
/// # Errors
///
/// Fails when the document carries no base `<link>` element, the marker of
/// a recorder export.
pub fn parse_html(html: &str) -> ConvertResult<ParsedDocument> {
    let document = Html::parse_document(html);

    let Ok(link_sel) = Selector::parse("link") else {
        return Err(ConvertError::parse("HTML", "internal selector error"));
    };
    let Ok(title_sel) = Selector::parse("title") else {
        return Err(ConvertError::parse("HTML", "internal selector error"));
    };
    let Ok(row_sel) = Selector::parse("table tr") else {
        return Err(ConvertError::parse("HTML", "internal selector error"));
    };
    let Ok(cell_sel) = Selector::parse("td") else {
        return Err(ConvertError::parse("HTML", "internal selector error"));
    };

    let Some(link) = document.select(&link_sel).next() else {
        return Err(ConvertError::parse(
            "HTML",
            "document carries no <link> element, not a recorder export",
        ));
    };
    let test_url = link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(ToString::to_string);

    let title = document
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let mut steps = Vec::new();
    for row in document.select(&row_sel) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
        if cells.len() < 3 {
            continue;
        }
        let command = cell_text(cells[0]);
        if command.is_empty() {
            continue;
        }
        steps.push(RecordedStep {
            command,
            target: cell_text(cells[1]),
            value: cell_text(cells[2]),
        });
    }

    Ok(ParsedDocument {
        test_url,
        title: title.clone(),
        cases: vec![TestCase {
            name: title.unwrap_or_default(),
            steps,
        }],
    })
}

/// Extract cell text: entities come back decoded from the HTML parser,
/// `<br>` becomes a newline and non-breaking spaces become plain spaces.
fn cell_text(cell: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in cell.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out.replace('\u{a0}', " ").trim().to_string()
}
