//! Country document loading.
//!
//! The input is a YAML mapping from alpha2 code to a country record, e.g.:
//!
//! ```yaml
//! US:
//!   name: United States
//!   names:
//!   - United States
//!   alpha2: US
//!   alpha3: USA
//!   currency: USD
//!   country_code: '1'
//!   international_prefix: '011'
//!   national_prefix: '1'
//! ```
//!
//! Document key order is preserved so generated statements come out in the
//! same order the countries were written.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::{GenerateError, Result};

/// One country entry as it appears in the YAML document.
///
/// Every field deserializes as an `Option`: the loader does no schema
/// validation. Fields the SQL templates cannot do without are enforced
/// later by [`crate::transform::derive_fields`]; the rest render as `NULL`
/// when absent. Unknown YAML keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryRecord {
    /// Primary display name, source of the generated label
    pub name: Option<String>,
    /// Ordered display names; the first one feeds the localized name payload
    pub names: Option<Vec<String>>,
    /// Two-letter code as a record field (the mapping key is authoritative)
    pub alpha2: Option<String>,
    /// Three-letter code
    pub alpha3: Option<String>,
    /// Currency code
    pub currency: Option<String>,
    /// Raw telephone country code digits, without the `+`
    pub country_code: Option<String>,
    /// International dialing prefix
    pub international_prefix: Option<String>,
    /// National dialing prefix
    pub national_prefix: Option<String>,
}

/// Load a countries YAML document, preserving document key order.
///
/// The root must be a mapping; an empty or null document is a parse error,
/// not an empty map.
pub fn load_countries(path: &Path) -> Result<IndexMap<String, CountryRecord>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
    // Deserializing a map type straight from the text turns an empty
    // document into an empty map; going through Value makes the null root
    // fail like any other non-mapping root.
    let document: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| GenerateError::yaml(path, e))?;
    serde_yaml::from_value(document).map_err(|e| GenerateError::yaml(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_preserves_document_order() {
        let file = write_temp(
            r#"
ZW:
  name: Zimbabwe
AX:
  name: Aland Islands
MM:
  name: Myanmar
"#,
        );
        let countries = load_countries(file.path()).unwrap();
        let keys: Vec<&str> = countries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ZW", "AX", "MM"]);
    }

    #[test]
    fn test_load_full_record() {
        let file = write_temp(
            r#"
US:
  name: United States
  names:
  - United States
  - USA
  alpha2: US
  alpha3: USA
  currency: USD
  country_code: '1'
  international_prefix: '011'
  national_prefix: '1'
"#,
        );
        let countries = load_countries(file.path()).unwrap();
        let us = &countries["US"];
        assert_eq!(us.name.as_deref(), Some("United States"));
        assert_eq!(us.names.as_ref().unwrap().len(), 2);
        assert_eq!(us.alpha3.as_deref(), Some("USA"));
        assert_eq!(us.country_code.as_deref(), Some("1"));
    }

    #[test]
    fn test_load_tolerates_missing_and_null_fields() {
        let file = write_temp(
            r#"
AQ:
  name: Antarctica
  currency: ~
"#,
        );
        let countries = load_countries(file.path()).unwrap();
        let aq = &countries["AQ"];
        assert_eq!(aq.name.as_deref(), Some("Antarctica"));
        assert!(aq.currency.is_none());
        assert!(aq.names.is_none());
        assert!(aq.country_code.is_none());
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let file = write_temp(
            r#"
FR:
  name: France
  continent: Europe
  languages:
  - fr
"#,
        );
        let countries = load_countries(file.path()).unwrap();
        assert_eq!(countries["FR"].name.as_deref(), Some("France"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_countries(Path::new("/nonexistent/countries.yaml")).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_load_malformed_yaml_is_yaml_error() {
        let file = write_temp("invalid: yaml: content: [\n");
        let err = load_countries(file.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Yaml { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_load_non_mapping_root_is_yaml_error() {
        let file = write_temp("- just\n- a\n- list\n");
        let err = load_countries(file.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Yaml { .. }));
    }

    #[test]
    fn test_load_empty_document_is_yaml_error() {
        let file = write_temp("");
        let err = load_countries(file.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Yaml { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_load_null_root_is_yaml_error() {
        let file = write_temp("~\n");
        let err = load_countries(file.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Yaml { .. }));
    }

    #[test]
    fn test_load_explicit_empty_mapping_is_ok() {
        // `{}` is a mapping with no entries, unlike an empty document.
        let file = write_temp("{}\n");
        assert!(load_countries(file.path()).unwrap().is_empty());
    }
}
