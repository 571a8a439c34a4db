//! Xunit report parsing.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// One `<testcase>` element of the report.
///
/// Attribute text is carried verbatim: `time` stays a string and is never
/// parsed as a number. A missing attribute is an absent value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCase {
    pub classname: Option<String>,
    pub name: Option<String>,
    pub time: Option<String>,
}

/// Extract the `<testcase>` elements that are direct children of the
/// document root, in document order.
///
/// Test cases nested any deeper are not discovered; the flat layout nose
/// emits (`<testsuite>` with `<testcase>` children) is the supported shape.
///
/// Malformed input fails with [`ConvertError::Xml`]. Beside the syntax and
/// end-tag errors the reader reports itself, this covers a document with no
/// root element, a root still open at end of input, and a second root
/// element.
pub fn parse_testcases(xml: &str, source_path: &Path) -> Result<Vec<TestCase>> {
    let mut reader = Reader::from_str(xml);
    let mut testcases = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| ConvertError::xml(source_path, reader.buffer_position(), e.to_string()))?
        {
            Event::Eof => {
                // The reader hands back Eof even when the document never
                // produced a root or left elements open; both are rejected
                // here so a truncated report cannot convert cleanly.
                if !seen_root {
                    return Err(ConvertError::xml(
                        source_path,
                        position,
                        "no root element found",
                    ));
                }
                if depth > 0 {
                    return Err(ConvertError::xml(
                        source_path,
                        position,
                        "unclosed element at end of document",
                    ));
                }
                break;
            }
            Event::Start(ref element) => {
                if depth == 0 {
                    if seen_root {
                        return Err(ConvertError::xml(
                            source_path,
                            position,
                            "multiple root elements",
                        ));
                    }
                    seen_root = true;
                }
                if depth == 1 && element.name().as_ref() == b"testcase" {
                    testcases.push(extract_testcase(element, source_path, position)?);
                }
                depth += 1;
            }
            Event::Empty(ref element) => {
                if depth == 0 {
                    if seen_root {
                        return Err(ConvertError::xml(
                            source_path,
                            position,
                            "multiple root elements",
                        ));
                    }
                    seen_root = true;
                }
                if depth == 1 && element.name().as_ref() == b"testcase" {
                    testcases.push(extract_testcase(element, source_path, position)?);
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        buf.clear();
    }

    debug!("Parsed {} test cases", testcases.len());
    Ok(testcases)
}

fn extract_testcase(
    element: &BytesStart<'_>,
    source_path: &Path,
    position: u64,
) -> Result<TestCase> {
    let mut testcase = TestCase::default();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| ConvertError::xml(source_path, position, e.to_string()))?;
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape(&raw)
            .map_err(|e| ConvertError::xml(source_path, position, e.to_string()))?
            .into_owned();
        match attr.key.as_ref() {
            b"classname" => testcase.classname = Some(value),
            b"name" => testcase.name = Some(value),
            b"time" => testcase.time = Some(value),
            _ => {}
        }
    }
    Ok(testcase)
}
