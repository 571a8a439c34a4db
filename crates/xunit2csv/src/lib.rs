//! # xunit2csv
//!
//! Convert an xunit XML test report into a CSV summary.
//!
//! Every `<testcase>` element that is a direct child of the document root
//! yields one row holding its `classname`, `name` and `time` attributes
//! verbatim. The output starts with a fixed `classname,name,time` header
//! row; rows keep document order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # fn main() -> xunit2csv::Result<()> {
//! let rows = xunit2csv::convert(Path::new("nosetests.xml"), Path::new("report.csv"))?;
//! println!("{} test cases", rows);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod report;
pub mod xunit;

pub use convert::convert;
pub use error::{ConvertError, Result};
pub use report::write_report;
pub use xunit::{parse_testcases, TestCase};
