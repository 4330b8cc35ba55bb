use std::path::{Path, PathBuf};

use crate::prelude::*;

/// File name for a component's generated test.
pub fn test_file_name(component_name: &str) -> String {
    format!("test_{component_name}.cpp")
}

/// Write generated test code under the output directory.
///
/// The directory is created if absent (idempotent) and an existing file of
/// the same name is overwritten without warning. Returns the path written.
pub async fn write_test_file(
    output_dir: &Path,
    component_name: &str,
    test_content: &str,
) -> Result<PathBuf, Error> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        Error::Output(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let path = output_dir.join(test_file_name(component_name));
    tokio::fs::write(&path, test_content).await.map_err(|e| {
        Error::Output(format!(
            "Failed to write test file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(path)
}
