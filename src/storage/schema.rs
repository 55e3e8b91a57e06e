//! Database schema definitions

/// SQL to create the integrity table
pub const CREATE_INTEGRITY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS integrity (
    file TEXT PRIMARY KEY,
    hash TEXT NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_INTEGRITY_TABLE]
}
