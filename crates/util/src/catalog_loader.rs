//! Catalog acquisition: reads the JSON document that backs the selector.
//!
//! The whole document is read into memory once; the resulting [`Catalog`] is
//! treated as immutable for the rest of the session.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use catsel_types::{Catalog, CatalogError};
use tracing::{debug, info};

use crate::paths::{display_path, expand_tilde};

/// Load a catalog from `path`, or from standard input when `path` is `-`.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if path.as_os_str() == "-" {
        return read_catalog(io::stdin().lock(), "<stdin>");
    }

    let resolved = expand_tilde(&path.to_string_lossy());
    let source = display_path(&resolved);
    let file = fs::File::open(&resolved).map_err(|source_error| CatalogError::Io {
        path: source.clone(),
        source: source_error,
    })?;
    read_catalog(io::BufReader::new(file), &source)
}

/// Read a catalog from any reader; `source` names it in errors and logs.
pub fn read_catalog<R: Read>(mut reader: R, source: &str) -> Result<Catalog, CatalogError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|error| CatalogError::Io {
        path: source.to_string(),
        source: error,
    })?;
    let catalog = parse_catalog(&text)?;
    info!(source, sections = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse and validate catalog JSON text.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_json_str(text)?;
    for (name, section) in catalog.iter() {
        debug!(section = name, keys = section.len(), "catalog section");
    }
    Ok(catalog)
}
