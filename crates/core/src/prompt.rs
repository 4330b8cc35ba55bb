/// Content of a single source file contributing to a component's prompt.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name only, used in the delimiter header.
    pub name: String,
    /// Full text content of the file.
    pub content: String,
}

/// Concatenate a group's files into one source block.
///
/// Each file is preceded by a `// File: <name>` delimiter line so the model
/// can tell the pieces apart. Content is passed through verbatim.
pub fn combine_sources(files: &[SourceFile]) -> String {
    let mut combined = String::new();

    for file in files {
        combined.push_str(&format!("\n// File: {}\n", file.name));
        combined.push_str(&file.content);
    }

    combined
}

/// Assemble the user message sent to the completion endpoint.
///
/// The instructional template and the combined source block are joined with
/// labeled separators, followed by a directive restricting the reply to
/// test code only.
pub fn build_user_message(template: &str, combined_source: &str) -> String {
    format!("{template}\n\n---\n\n{combined_source}\n\n---\n\n# Output only the test code.")
}
