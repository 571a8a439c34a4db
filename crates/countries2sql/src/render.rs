//! SQL statement rendering.
//!
//! Values are substituted into two fixed templates as quoted literals.
//! There is no escaping beyond the quote wrap: this is meta-programming
//! over trusted data files, and the generated SQL is not safe against
//! adversarial input. SQL injection is possible.

use crate::loader::CountryRecord;
use crate::transform::DerivedFields;

/// Quote a value as a SQL literal, or render the bare `NULL` token.
///
/// An absent value is always `NULL`, never `''`.
pub fn sql_literal(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{v}'"),
        None => "NULL".to_string(),
    }
}

/// Render the INSERT statement for a new country.
///
/// Fixed 11-column template; `distance_unit` is always the literal `'km'`
/// and the run timestamp fills both `created_at` and `updated_at`.
pub fn render_insert(record: &CountryRecord, derived: &DerivedFields, now: &str) -> String {
    let label = sql_literal(Some(derived.label.as_str()));
    let iso2 = sql_literal(record.alpha2.as_deref());
    let iso3 = sql_literal(record.alpha3.as_deref());
    let currency = sql_literal(record.currency.as_deref());
    let telephone_code = sql_literal(Some(derived.telephone_code.as_str()));
    let international_prefix = sql_literal(record.international_prefix.as_deref());
    let national_prefix = sql_literal(record.national_prefix.as_deref());
    let name = sql_literal(Some(derived.name_payload.as_str()));
    let now = sql_literal(Some(now));
    format!("INSERT INTO country (label, iso2, iso3, currency_code, telephone_code, telephone_international_prefix, telephone_national_prefix, distance_unit, name, created_at, updated_at) VALUES ({label}, {iso2}, {iso3}, {currency}, {telephone_code}, {international_prefix}, {national_prefix}, 'km', {name}, {now}, {now});")
}

/// Render the UPDATE statement for an already persisted country.
///
/// `id` comes from the reference table and is substituted verbatim,
/// unquoted.
pub fn render_update(record: &CountryRecord, now: &str, id: &str) -> String {
    let international_prefix = sql_literal(record.international_prefix.as_deref());
    let national_prefix = sql_literal(record.national_prefix.as_deref());
    let now = sql_literal(Some(now));
    format!("UPDATE country SET telephone_international_prefix={international_prefix}, telephone_national_prefix={national_prefix}, updated_at={now} WHERE id={id};")
}

/// Rendered statements, inserts and updates kept apart.
#[derive(Debug, Default)]
pub struct StatementSet {
    inserts: Vec<String>,
    updates: Vec<String>,
}

impl StatementSet {
    pub fn push_insert(&mut self, statement: String) {
        self.inserts.push(statement);
    }

    pub fn push_update(&mut self, statement: String) {
        self.updates.push(statement);
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.len()
    }

    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    /// Final SQL text: all inserts in input order, then all updates in input
    /// order, newline-joined. No trailing newline.
    pub fn to_sql(&self) -> String {
        self.inserts
            .iter()
            .chain(self.updates.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-01-02 03:04:05";

    fn us_record() -> CountryRecord {
        CountryRecord {
            name: Some("United States".to_string()),
            names: Some(vec!["United States".to_string()]),
            alpha2: Some("US".to_string()),
            alpha3: Some("USA".to_string()),
            currency: Some("USD".to_string()),
            country_code: Some("1".to_string()),
            international_prefix: Some("011".to_string()),
            national_prefix: Some("1".to_string()),
        }
    }

    fn us_derived() -> DerivedFields {
        DerivedFields {
            label: "united_states".to_string(),
            telephone_code: "+1".to_string(),
            name_payload: r#"{"en":"United States"}"#.to_string(),
        }
    }

    #[test]
    fn test_sql_literal_quotes_present_values() {
        assert_eq!(sql_literal(Some("USD")), "'USD'");
        assert_eq!(sql_literal(Some("")), "''");
    }

    #[test]
    fn test_sql_literal_renders_bare_null() {
        assert_eq!(sql_literal(None), "NULL");
    }

    #[test]
    fn test_render_insert_full_record() {
        let statement = render_insert(&us_record(), &us_derived(), NOW);
        assert_eq!(
            statement,
            r#"INSERT INTO country (label, iso2, iso3, currency_code, telephone_code, telephone_international_prefix, telephone_national_prefix, distance_unit, name, created_at, updated_at) VALUES ('united_states', 'US', 'USA', 'USD', '+1', '011', '1', 'km', '{"en":"United States"}', '2024-01-02 03:04:05', '2024-01-02 03:04:05');"#
        );
    }

    #[test]
    fn test_render_insert_absent_fields_become_null() {
        let mut record = us_record();
        record.currency = None;
        record.international_prefix = None;
        let statement = render_insert(&record, &us_derived(), NOW);
        assert!(statement.contains("'USA', NULL, '+1', NULL, '1', 'km'"));
        assert!(!statement.contains("'NULL'"));
    }

    #[test]
    fn test_render_insert_timestamp_fills_created_and_updated() {
        let statement = render_insert(&us_record(), &us_derived(), NOW);
        assert_eq!(statement.matches(NOW).count(), 2);
        assert!(statement.ends_with("'2024-01-02 03:04:05', '2024-01-02 03:04:05');"));
    }

    #[test]
    fn test_render_update() {
        let statement = render_update(&us_record(), NOW, "42");
        assert_eq!(
            statement,
            "UPDATE country SET telephone_international_prefix='011', telephone_national_prefix='1', updated_at='2024-01-02 03:04:05' WHERE id=42;"
        );
    }

    #[test]
    fn test_render_update_id_is_verbatim_and_unquoted() {
        let statement = render_update(&us_record(), NOW, " 007 ");
        assert!(statement.ends_with("WHERE id= 007 ;"));
    }

    #[test]
    fn test_render_update_absent_prefixes_become_null() {
        let mut record = us_record();
        record.international_prefix = None;
        record.national_prefix = None;
        let statement = render_update(&record, NOW, "42");
        assert!(statement.starts_with(
            "UPDATE country SET telephone_international_prefix=NULL, telephone_national_prefix=NULL,"
        ));
    }

    #[test]
    fn test_statement_set_orders_inserts_before_updates() {
        let mut set = StatementSet::default();
        set.push_update("UPDATE 1;".to_string());
        set.push_insert("INSERT 1;".to_string());
        set.push_update("UPDATE 2;".to_string());
        set.push_insert("INSERT 2;".to_string());
        assert_eq!(set.to_sql(), "INSERT 1;\nINSERT 2;\nUPDATE 1;\nUPDATE 2;");
        assert_eq!(set.insert_count(), 2);
        assert_eq!(set.update_count(), 2);
    }

    #[test]
    fn test_empty_statement_set_yields_empty_text() {
        let set = StatementSet::default();
        assert_eq!(set.to_sql(), "");
    }

    #[test]
    fn test_statement_set_has_no_trailing_newline() {
        let mut set = StatementSet::default();
        set.push_insert("INSERT 1;".to_string());
        assert!(!set.to_sql().ends_with('\n'));
    }
}
