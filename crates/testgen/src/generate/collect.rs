use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use testgen_core::prompt::SourceFile;
use testgen_core::sources::group_by_base_name;

use crate::prelude::*;

/// Enumerate a component directory and group its sources by base name.
///
/// Does not recurse into subdirectories. A missing directory behaves like
/// an empty one, so a project without some component subdirectory still
/// processes the remaining components.
pub fn collect_source_files(source_dir: &Path) -> Result<BTreeMap<String, Vec<PathBuf>>, Error> {
    let entries = match std::fs::read_dir(source_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => {
            return Err(Error::Sources(format!(
                "Failed to read directory '{}': {}",
                source_dir.display(),
                e
            )))
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::Sources(format!(
                "Failed to read entry in '{}': {}",
                source_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(group_by_base_name(files))
}

/// Read a group's files into memory for prompt assembly.
///
/// Content is decoded lossily: undecodable bytes are replaced rather than
/// failing the run.
pub async fn read_source_files(paths: &[PathBuf]) -> Result<Vec<SourceFile>, Error> {
    let mut files = Vec::new();

    for path in paths {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::Sources(format!(
                "Failed to read source file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        files.push(SourceFile {
            name,
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    Ok(files)
}
