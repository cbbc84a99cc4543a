//! Postgres catalog introspection.
//!
//! This crate reads the `public` schema's base tables and columns out of
//! `information_schema` and exposes them as a [`types::TableCatalog`]. It performs
//! network I/O only; the OpenAPI mapping lives in `pgswag-openapi-doc` and consumes
//! the catalog read-only.

pub mod error;
pub mod reader;
pub mod types;
