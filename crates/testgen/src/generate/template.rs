use std::path::Path;

use crate::prelude::*;

/// Load a prompt template from the prompts directory.
///
/// Templates are read fresh on every call; nothing is cached between
/// component types.
pub async fn load_template(prompts_dir: &Path, file_name: &str) -> Result<String, Error> {
    let path = prompts_dir.join(file_name);

    tokio::fs::read_to_string(&path).await.map_err(|e| {
        Error::Template(format!(
            "Failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}
