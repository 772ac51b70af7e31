//! High-level operations wiring CLI commands to the povercat core.

pub mod ops_generate;
pub mod ops_inspect;

use std::path::Path;

use povercat_util::errors::{PovercatError, PovercatResult};

/// Read a catalog file, failing with `CatalogNotFound` when it is absent.
pub fn read_catalog_text(path: &Path) -> PovercatResult<String> {
    if !path.is_file() {
        return Err(PovercatError::CatalogNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    std::fs::read_to_string(path).map_err(|e| {
        PovercatError::Catalog {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {e}"),
        }
        .into()
    })
}
