use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// One paintable class: blocks assigned to it are filled with `color`.
///
/// Several assignments may share a label or index; only the color has to be
/// distinct for a consumer to tell the regions apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub label: String,
    pub index: u32,
    pub color: [u8; 3],
}

impl ClassAssignment {
    pub fn new(label: impl Into<String>, index: u32, color: [u8; 3]) -> Self {
        Self {
            label: label.into(),
            index,
            color,
        }
    }
}

/// Color to class-name entry describing how to read a composite mask.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaskInstance {
    pub name: String,
    pub color_rgb: [u8; 3],
}

pub fn instances(assignments: &[ClassAssignment]) -> Vec<MaskInstance> {
    assignments
        .iter()
        .map(|a| MaskInstance {
            name: a.label.clone(),
            color_rgb: a.color,
        })
        .collect()
}

/// Demo ontology; "tree" appears twice under two colors.
pub fn default_classes() -> Vec<ClassAssignment> {
    vec![
        ClassAssignment::new("bunny", 1, [255, 0, 0]),
        ClassAssignment::new("tree", 2, [0, 255, 0]),
        ClassAssignment::new("tree", 2, [0, 255, 100]),
        ClassAssignment::new("butterfly", 3, [0, 0, 255]),
    ]
}

/// Reads a JSON array of `{ "label", "index", "color": [r, g, b] }` objects.
pub fn load_classes(path: &Path) -> Result<Vec<ClassAssignment>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_list() {
        let json = r#"[
            {"label": "bunny", "index": 1, "color": [255, 0, 0]},
            {"label": "tree", "index": 2, "color": [0, 255, 100]}
        ]"#;
        let parsed: Vec<ClassAssignment> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0], ClassAssignment::new("bunny", 1, [255, 0, 0]));
        assert_eq!(parsed[1].color, [0, 255, 100]);
    }

    #[test]
    fn rejects_out_of_range_channel() {
        let json = r#"[{"label": "x", "index": 1, "color": [256, 0, 0]}]"#;
        assert!(serde_json::from_str::<Vec<ClassAssignment>>(json).is_err());
    }

    #[test]
    fn instances_keep_aliases_and_order() {
        let inst = instances(&default_classes());
        let names: Vec<&str> = inst.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["bunny", "tree", "tree", "butterfly"]);
        assert_eq!(inst[2].color_rgb, [0, 255, 100]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_classes(Path::new("/nonexistent/classes.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
