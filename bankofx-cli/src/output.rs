use bankofx_core::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};

/// `statement.csv` → `statement.ofx`; a name without extension gets `.ofx`
/// appended (`statement` → `statement.ofx`).
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("ofx")
}

/// Write the rendered statement in one go.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ConvertError> {
    fs::write(path, contents).map_err(|source| ConvertError::OutputIo {
        path: path.to_path_buf(),
        source,
    })
}
