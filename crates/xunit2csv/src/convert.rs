//! End-to-end conversion.

use std::path::Path;
use tracing::info;

use crate::error::{ConvertError, Result};
use crate::report::write_report;
use crate::xunit::parse_testcases;

/// Convert an xunit XML report into a CSV summary.
///
/// The XML is parsed completely before the output file is created, so a
/// parse failure leaves nothing behind. The report must be UTF-8; bytes
/// that do not decode are reported as an XML error at the offending
/// position, not as an IO error. Returns the number of data rows written.
pub fn convert(input: &Path, output: &Path) -> Result<usize> {
    let bytes = std::fs::read(input).map_err(|e| ConvertError::io(input, e))?;
    let xml = String::from_utf8(bytes).map_err(|e| {
        let decode = e.utf8_error();
        ConvertError::xml(input, decode.valid_up_to() as u64, decode.to_string())
    })?;
    let testcases = parse_testcases(&xml, input)?;
    info!("Parsed {} test cases from {:?}", testcases.len(), input);

    write_report(&testcases, output)?;
    info!("Wrote {:?}", output);

    Ok(testcases.len())
}
