use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File extensions recognized as C++ sources or headers.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "h", "hpp"];

/// Whether a path carries one of the recognized source extensions.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Base name of a path: the file name with its final extension removed.
///
/// Returns `None` for paths without a file name (e.g. `..`).
pub fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}

/// Group already-enumerated paths by base name.
///
/// Paths are sorted by file name before grouping so that within-group order
/// is deterministic regardless of how the caller enumerated the directory.
/// Paths with no recognized extension or no usable file stem are skipped.
pub fn group_by_base_name<I>(paths: I) -> BTreeMap<String, Vec<PathBuf>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut sorted: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| has_source_extension(path))
        .collect();
    sorted.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in sorted {
        if let Some(name) = base_name(&path) {
            groups.entry(name).or_default().push(path);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_groups_by_shared_base_name() {
        let groups = group_by_base_name(paths(&["src/A.cpp", "src/A.h", "src/B.cpp"]));

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["A"],
            vec![PathBuf::from("src/A.cpp"), PathBuf::from("src/A.h")]
        );
        assert_eq!(groups["B"], vec![PathBuf::from("src/B.cpp")]);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let groups = group_by_base_name(Vec::new());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_skips_unrecognized_extensions() {
        let groups = group_by_base_name(paths(&[
            "src/util.cpp",
            "src/util.py",
            "src/README.md",
            "src/Makefile",
        ]));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["util"], vec![PathBuf::from("src/util.cpp")]);
    }

    #[test]
    fn test_all_four_extensions_recognized() {
        let groups = group_by_base_name(paths(&["a.cpp", "b.cc", "c.h", "d.hpp"]));
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_within_group_order_sorted_by_file_name() {
        // Enumeration order reversed on purpose: grouping must not depend on it.
        let groups = group_by_base_name(paths(&["dir/Person.hpp", "dir/Person.cpp"]));

        assert_eq!(
            groups["Person"],
            vec![PathBuf::from("dir/Person.cpp"), PathBuf::from("dir/Person.hpp")]
        );
    }

    #[test]
    fn test_only_final_extension_stripped() {
        let groups = group_by_base_name(paths(&["gen/model.pb.cc", "gen/model.pb.h"]));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["model.pb"].len(), 2);
    }

    #[test]
    fn test_has_source_extension() {
        assert!(has_source_extension(Path::new("x/y/Foo.cpp")));
        assert!(has_source_extension(Path::new("Foo.hpp")));
        assert!(!has_source_extension(Path::new("Foo.cxx")));
        assert!(!has_source_extension(Path::new("Foo")));
        assert!(!has_source_extension(Path::new(".gitignore")));
    }
}
