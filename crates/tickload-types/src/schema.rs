//! Declared output schema for ticker records.

/// Version of the ticker field declaration.
///
/// Bump this whenever a field is added, removed, reordered or retyped.
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the run date field appended on the warehouse path.
pub const RUN_DATE_FIELD: &str = "ds";

/// Warehouse column type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Variable-length string with a maximum length.
    Varchar(u16),
    /// Boolean flag.
    Boolean,
    /// Timestamp without time zone.
    TimestampNtz,
}

impl FieldType {
    /// Returns the column type as written in DDL.
    #[must_use]
    pub fn sql(&self) -> String {
        match self {
            Self::Varchar(len) => format!("VARCHAR({len})"),
            Self::Boolean => "BOOLEAN".to_string(),
            Self::TimestampNtz => "TIMESTAMP_NTZ".to_string(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql())
    }
}

/// A single declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    name: &'static str,
    ty: FieldType,
}

impl Field {
    const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    /// Returns the field name as it appears in upstream records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the warehouse column type.
    #[must_use]
    pub const fn ty(&self) -> FieldType {
        self.ty
    }

    /// Returns the warehouse column name (unquoted identifiers fold to uppercase).
    #[must_use]
    pub fn column(&self) -> String {
        self.name.to_uppercase()
    }
}

// Order matches the upstream exemplar record; `ds` must stay last.
static TICKER_FIELDS: [Field; 13] = [
    Field::new("ticker", FieldType::Varchar(50)),
    Field::new("name", FieldType::Varchar(500)),
    Field::new("market", FieldType::Varchar(50)),
    Field::new("locale", FieldType::Varchar(10)),
    Field::new("primary_exchange", FieldType::Varchar(50)),
    Field::new("type", FieldType::Varchar(50)),
    Field::new("active", FieldType::Boolean),
    Field::new("currency_name", FieldType::Varchar(10)),
    Field::new("cik", FieldType::Varchar(50)),
    Field::new("composite_figi", FieldType::Varchar(50)),
    Field::new("share_class_figi", FieldType::Varchar(50)),
    Field::new("last_updated_utc", FieldType::TimestampNtz),
    Field::new(RUN_DATE_FIELD, FieldType::Varchar(50)),
];

/// Ordered field list written to a sink.
///
/// Output always follows this order. Upstream fields that are not declared
/// here are dropped, and declared fields missing from a record are written
/// according to the sink's [`MissingPolicy`](crate::MissingPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    /// Schema for file export: the twelve upstream fields, without `ds`.
    #[must_use]
    pub fn file() -> Self {
        Self {
            fields: &TICKER_FIELDS[..TICKER_FIELDS.len() - 1],
        }
    }

    /// Schema for warehouse loads: the twelve upstream fields followed by `ds`.
    #[must_use]
    pub fn warehouse() -> Self {
        Self {
            fields: &TICKER_FIELDS,
        }
    }

    /// Returns the schema version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        SCHEMA_VERSION
    }

    /// Returns the declared fields in output order.
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Returns the field names in output order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the schema carries the run date field.
    #[must_use]
    pub fn has_run_date(&self) -> bool {
        self.field(RUN_DATE_FIELD).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_schema_order() {
        let names: Vec<_> = Schema::file().names().collect();
        assert_eq!(
            names,
            [
                "ticker",
                "name",
                "market",
                "locale",
                "primary_exchange",
                "type",
                "active",
                "currency_name",
                "cik",
                "composite_figi",
                "share_class_figi",
                "last_updated_utc",
            ]
        );
        assert!(!Schema::file().has_run_date());
    }

    #[test]
    fn test_warehouse_schema_appends_ds() {
        let schema = Schema::warehouse();
        assert_eq!(schema.len(), 13);
        assert_eq!(schema.names().last(), Some("ds"));
        assert!(schema.has_run_date());
        assert_eq!(
            schema.names().take(12).collect::<Vec<_>>(),
            Schema::file().names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_column_types() {
        let schema = Schema::warehouse();
        assert_eq!(schema.field("name").map(Field::ty), Some(FieldType::Varchar(500)));
        assert_eq!(schema.field("active").map(Field::ty), Some(FieldType::Boolean));
        assert_eq!(
            schema.field("last_updated_utc").map(|f| f.ty().sql()),
            Some("TIMESTAMP_NTZ".to_string())
        );
        assert!(schema.field("delisted_utc").is_none());
    }

    #[test]
    fn test_column_names_are_uppercase() {
        let columns: Vec<_> = Schema::warehouse().fields().iter().map(Field::column).collect();
        assert_eq!(columns[4], "PRIMARY_EXCHANGE");
        assert_eq!(columns[12], "DS");
    }
}
