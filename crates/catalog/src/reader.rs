//! `information_schema` reader.
//!
//! The full-catalog read is assembled from two queries total (one for the base-table
//! listing, one batched over all of `information_schema.columns` for the schema)
//! rather than one column query per table, so the round-trip count stays constant as
//! schemas grow. The grouping step is pure and tested without a database.

use crate::error::{CatalogError, Result};
use crate::types::{ColumnDescriptor, Table, TableCatalog};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row as _};

const SCHEMA: &str = "public";

/// Reads the `public` schema catalog over a `sqlx` Postgres pool.
pub struct CatalogReader {
    pool: PgPool,
}

impl CatalogReader {
    /// Connect to the database behind `db_uri`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Connection`] if the pool cannot be established.
    pub async fn connect(db_uri: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(db_uri)
            .await
            .map_err(CatalogError::Connection)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List base tables in the `public` schema, ordered by name.
    ///
    /// Views and foreign tables are excluded by the `BASE TABLE` kind filter.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Query`] if the listing query fails.
    pub async fn list_base_tables(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r"
select table_name
from information_schema.tables
where table_schema = $1
  and table_type = 'BASE TABLE'
order by table_name
",
        )
        .bind(SCHEMA)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::query("list base tables", e))?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row
                .try_get("table_name")
                .map_err(|e| CatalogError::query("decode table_name", e))?;
            names.push(name);
        }
        tracing::debug!(tables = names.len(), "listed base tables");
        Ok(names)
    }

    /// List one table's columns in `ordinal_position` order.
    ///
    /// A table with zero visible columns yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Query`] if the column query fails.
    pub async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows = sqlx::query(
            r"
select column_name, data_type, is_nullable
from information_schema.columns
where table_schema = $1
  and table_name = $2
order by ordinal_position
",
        )
        .bind(SCHEMA)
        .bind(table)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::query(format!("list columns of '{table}'"), e))?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            columns.push(decode_column(&row)?);
        }
        Ok(columns)
    }

    /// Read the full catalog: base-table listing plus one batched column query.
    ///
    /// A table that disappears between the two queries (concurrent schema change)
    /// simply has no column rows; it is kept with an empty column list rather than
    /// aborting the run, since `information_schema` reports absence as zero rows,
    /// not as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Query`] if either query fails.
    pub async fn read_catalog(&self) -> Result<TableCatalog> {
        let table_names = self.list_base_tables().await?;

        let rows = sqlx::query(
            r"
select table_name, column_name, data_type, is_nullable
from information_schema.columns
where table_schema = $1
order by table_name, ordinal_position
",
        )
        .bind(SCHEMA)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::query("list columns of schema", e))?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let table: String = row
                .try_get("table_name")
                .map_err(|e| CatalogError::query("decode table_name", e))?;
            columns.push((table, decode_column(&row)?));
        }

        Ok(group_columns(table_names, columns))
    }
}

fn decode_column(row: &sqlx::postgres::PgRow) -> Result<ColumnDescriptor> {
    let name: String = row
        .try_get("column_name")
        .map_err(|e| CatalogError::query("decode column_name", e))?;
    let declared_type: String = row
        .try_get("data_type")
        .map_err(|e| CatalogError::query("decode data_type", e))?;
    // information_schema reports nullability as 'YES' / 'NO' text.
    let is_nullable: String = row
        .try_get("is_nullable")
        .map_err(|e| CatalogError::query("decode is_nullable", e))?;
    Ok(ColumnDescriptor {
        name,
        declared_type,
        nullable: is_nullable == "YES",
    })
}

/// Group a flat `(table, column)` listing under the ordered base-table listing.
///
/// Column rows for non-base relations (views, foreign tables) are discarded; base
/// tables with no column rows are kept with an empty column list.
fn group_columns(table_names: Vec<String>, columns: Vec<(String, ColumnDescriptor)>) -> TableCatalog {
    let mut tables: Vec<Table> = table_names
        .into_iter()
        .map(|name| Table {
            name,
            columns: Vec::new(),
        })
        .collect();

    for (table, column) in columns {
        if let Some(t) = tables.iter_mut().find(|t| t.name == table) {
            t.columns.push(column);
        }
    }

    TableCatalog::new(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, declared_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            nullable: false,
        }
    }

    #[test]
    fn group_columns_preserves_table_and_column_order() {
        let catalog = group_columns(
            vec!["authors".to_string(), "books".to_string()],
            vec![
                ("authors".to_string(), col("id", "integer")),
                ("authors".to_string(), col("name", "text")),
                ("books".to_string(), col("id", "integer")),
            ],
        );

        let tables = catalog.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "authors");
        assert_eq!(
            tables[0]
                .columns
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            ["id", "name"]
        );
        assert_eq!(tables[1].name, "books");
    }

    #[test]
    fn group_columns_keeps_table_dropped_between_queries() {
        // "books" was listed but yields no column rows (dropped concurrently, or a
        // genuine zero-column table). It must survive with an empty column list.
        let catalog = group_columns(
            vec!["books".to_string()],
            vec![],
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tables()[0].name, "books");
        assert!(catalog.tables()[0].columns.is_empty());
    }

    #[test]
    fn group_columns_discards_rows_for_non_base_relations() {
        // Column rows for a view show up in the batched query but the view is not in
        // the base-table listing.
        let catalog = group_columns(
            vec!["books".to_string()],
            vec![
                ("books_view".to_string(), col("id", "integer")),
                ("books".to_string(), col("id", "integer")),
            ],
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tables()[0].columns.len(), 1);
    }
}
