//! Error types for the Healthy Diary application

use thiserror::Error;

/// Errors raised while loading a catalog table
///
/// The built-in catalog is embedded at compile time, so these only surface
/// when a caller supplies its own catalog documents.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse {table} catalog: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("The {0} catalog is empty")]
    Empty(&'static str),
}
