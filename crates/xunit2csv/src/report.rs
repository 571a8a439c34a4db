//! CSV report writing.

use csv::Writer;
use std::fs::File;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::xunit::TestCase;

/// Fixed header row of the report.
const HEADER: [&str; 3] = ["classname", "name", "time"];

/// Write one CSV row per test case, preceded by the header row.
///
/// Absent attributes become empty fields. Field quoting is handled by the
/// CSV writer.
pub fn write_report(testcases: &[TestCase], output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|e| ConvertError::io(output, e))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(HEADER)?;
    for testcase in testcases {
        writer.write_record([
            testcase.classname.as_deref().unwrap_or(""),
            testcase.name.as_deref().unwrap_or(""),
            testcase.time.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().map_err(|e| ConvertError::io(output, e))?;

    Ok(())
}
