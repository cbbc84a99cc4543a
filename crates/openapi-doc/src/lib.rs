//! Catalog -> OpenAPI 3.0 document mapping.
//!
//! This crate is the pure half of the generator: given a [`pgswag_catalog`]
//! `TableCatalog` and a [`settings::DocumentSettings`], it produces an
//! `openapiv3::OpenAPI` value describing one `GET` endpoint per base table. No I/O,
//! no randomness; the same catalog and settings always yield the same document.

pub mod builder;
pub mod settings;
