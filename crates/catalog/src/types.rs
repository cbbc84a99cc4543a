//! Catalog data model.
//!
//! All three types are immutable once read: the reader builds them, the document
//! builder consumes them, nothing mutates them in between.

/// One column as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name (unique within its table).
    pub name: String,
    /// Catalog-reported type name (e.g. `character varying`), prior to any mapping.
    pub declared_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

/// One base table with its columns in `ordinal_position` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// The full `public` schema catalog, in listing order.
///
/// Table order and per-table column order are preserved from the catalog queries;
/// the generated document follows this order. A table with an empty column list is
/// legal (see [`crate::reader::CatalogReader::read_catalog`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    #[must_use]
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
