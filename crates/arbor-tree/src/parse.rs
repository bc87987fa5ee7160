//! Dataset parsing.
//!
//! A dataset is one root node in JSON or YAML:
//!
//! ```yaml
//! name: linux
//! summary: The Linux kernel source tree
//! children:
//!   - name: kernel
//!     summary: core
//!     children:
//!       - name: sched.c
//!         summary: scheduler
//!         description: CPU scheduler
//! ```
//!
//! `summary`, `description` and `children` are optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DatasetError, Node};

/// A node exactly as it appears in the dataset file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawNode {
    /// Display name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Child nodes; absent means leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        Self::new(raw.name)
            .summary(raw.summary)
            .description(raw.description)
            .with_children(raw.children.into_iter().map(Self::from).collect())
    }
}

impl From<&Node> for RawNode {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            summary: node.summary.clone(),
            description: node.description.clone(),
            children: node.children.iter().map(Self::from).collect(),
        }
    }
}

/// Serialization format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml` or `.yml`).
    Yaml,
}

impl DatasetFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses dataset content into an unvalidated node tree.
///
/// The `path` parameter is used for error reporting.
pub fn parse_dataset_str(
    contents: &str,
    format: DatasetFormat,
    path: &Path,
) -> Result<Node, DatasetError> {
    let raw: RawNode = match format {
        DatasetFormat::Json => {
            serde_json::from_str(contents).map_err(|source| DatasetError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        DatasetFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|source| DatasetError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };
    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("tree.json")),
            Some(DatasetFormat::Json)
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("tree.YML")),
            Some(DatasetFormat::Yaml)
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("tree.yaml")),
            Some(DatasetFormat::Yaml)
        );
        assert_eq!(DatasetFormat::from_path(Path::new("tree.toml")), None);
        assert_eq!(DatasetFormat::from_path(Path::new("tree")), None);
    }

    #[test]
    fn parses_json_with_optional_fields() {
        let json = r#"{
            "name": "linux",
            "children": [
                {"name": "kernel", "summary": "core", "children": [
                    {"name": "sched.c", "summary": "scheduler", "description": "CPU scheduler"}
                ]},
                {"name": "mm", "summary": "memory", "children": []}
            ]
        }"#;
        let root = parse_dataset_str(json, DatasetFormat::Json, Path::new("t.json")).unwrap();
        assert_eq!(root.name, "linux");
        assert_eq!(root.summary, "");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children[0].description, "CPU scheduler");
        assert!(root.children[1].is_leaf());
    }

    #[test]
    fn parses_yaml_with_multiline_description() {
        let yaml = "name: linux\nchildren:\n  - name: mm\n    description: |\n      Memory\n      management\n";
        let root = parse_dataset_str(yaml, DatasetFormat::Yaml, Path::new("t.yaml")).unwrap();
        assert_eq!(root.children[0].description, "Memory\nmanagement\n");
    }

    #[test]
    fn raw_round_trip_drops_ids_and_empty_children() {
        let node = Node::new("kernel").child(Node::new("sched.c").summary("scheduler"));
        let raw = RawNode::from(&node);
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["children"][0]["summary"], "scheduler");
        assert!(json["children"][0].get("children").is_none());
        assert_eq!(Node::from(raw), node);
    }

    #[test]
    fn malformed_json_reports_path() {
        let err =
            parse_dataset_str("{", DatasetFormat::Json, Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = parse_dataset_str("summary: x\n", DatasetFormat::Yaml, Path::new("t.yaml"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::Yaml { .. }));
    }
}
