//! Derived field computation.
//!
//! Each record yields a [`DerivedFields`] value holding everything the SQL
//! templates need beyond the raw record fields. Derivation is the only
//! place required fields are enforced.

use crate::error::{GenerateError, Result};
use crate::loader::CountryRecord;

/// Values computed from a [`CountryRecord`] before rendering.
///
/// Input and computed output stay in separate types: a `CountryRecord` is
/// never modified after loading.
#[derive(Debug, Clone)]
pub struct DerivedFields {
    /// Lowercase underscore label derived from the display name
    pub label: String,
    /// Telephone country code with the literal `+` prefix
    pub telephone_code: String,
    /// Compact JSON object mapping the `en` locale to the first display name
    pub name_payload: String,
}

/// Clean a country name into a label.
///
/// Spaces become underscores, the result is lowercased, every non-ASCII
/// character degrades to a `?` placeholder (never an error), and finally
/// everything outside `[a-z0-9_]` is stripped, including the placeholder
/// itself. `"United States"` becomes `united_states`, `"Côte d'Ivoire"`
/// becomes `cte_divoire`.
pub fn labelize(name: &str) -> String {
    let lowered = name.replace(' ', "_").to_lowercase();
    let ascii: String = lowered
        .chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect();
    ascii
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Compute the derived fields for one record.
///
/// Requires `name`, a non-empty `names` list and `country_code`; a missing
/// one fails with [`GenerateError::MissingField`] naming the country.
pub fn derive_fields(alpha2: &str, record: &CountryRecord) -> Result<DerivedFields> {
    let name = record
        .name
        .as_deref()
        .ok_or_else(|| GenerateError::missing_field(alpha2, "name"))?;
    let first_name = record
        .names
        .as_deref()
        .and_then(|names| names.first())
        .ok_or_else(|| GenerateError::missing_field(alpha2, "names"))?;
    let country_code = record
        .country_code
        .as_deref()
        .ok_or_else(|| GenerateError::missing_field(alpha2, "country_code"))?;

    Ok(DerivedFields {
        label: labelize(name),
        telephone_code: format!("+{country_code}"),
        name_payload: serde_json::to_string(&serde_json::json!({ "en": first_name }))?,
    })
}
