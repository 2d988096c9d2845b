use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk tags file: either a bare JSON array of strings or an
/// object with a "tags" field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagsFile {
    List(Vec<String>),
    Object { tags: Vec<String> },
}

impl TagsFile {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagsFile::List(tags) => tags,
            TagsFile::Object { tags } => tags,
        }
    }
}

/// Load the source tag list from a JSON file
pub fn load_tags(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tags file {}", path.display()))?;

    let file: TagsFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tags file {}", path.display()))?;

    Ok(file.into_tags())
}

/// Get the default tags file path (~/.config/tagdeck/tags.json)
pub fn default_tags_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagdeck").join("tags.json"))
}

/// Resolve the source tag list: an explicit path wins, then the default
/// tags file if it exists, then the built-in sample list
pub fn resolve_tags(explicit_path: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = explicit_path {
        return load_tags(path);
    }

    if let Some(path) = default_tags_path() {
        if path.exists() {
            return load_tags(&path);
        }
    }

    Ok(sample_tags())
}

/// Built-in sample tag list used when no tags file is supplied
pub fn sample_tags() -> Vec<String> {
    [
        "Kotlin",
        "Compose",
        "Material3",
        "Android",
        "UI",
        "UX",
        "FlowRow",
        "FlowColumn",
        "State",
        "Navigation",
        "Room",
        "Retrofit",
        "Hilt",
        "Coroutines",
        "MVVM",
        "Firebase",
        "Testing",
        "Gradle",
        "Animation",
        "Accessibility",
        "Performance",
        "DarkMode",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tags_count() {
        assert_eq!(sample_tags().len(), 22);
    }

    #[test]
    fn test_parse_bare_array() {
        let file: TagsFile = serde_json::from_str(r#"["rust", "tui"]"#).unwrap();
        assert_eq!(file.into_tags(), vec!["rust", "tui"]);
    }

    #[test]
    fn test_parse_object_form() {
        let file: TagsFile = serde_json::from_str(r#"{"tags": ["rust", "tui"]}"#).unwrap();
        assert_eq!(file.into_tags(), vec!["rust", "tui"]);
    }

    #[test]
    fn test_parse_rejects_non_string_entries() {
        let result: std::result::Result<TagsFile, _> = serde_json::from_str(r#"[1, 2]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = load_tags(Path::new("/nonexistent/tags.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_without_path_falls_back_to_samples() {
        // No explicit path and (in the test environment) no config file:
        // the sample list is used.
        if default_tags_path().map(|p| p.exists()) != Some(true) {
            let tags = resolve_tags(None).unwrap();
            assert_eq!(tags, sample_tags());
        }
    }
}
