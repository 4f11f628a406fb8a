//! Model snapshot document
//!
//! A model snapshot is one pose of a skeletal model, produced by the
//! modeling engine's solver and serialized as a RON file: every body with
//! its world-frame pose, every joint with its declared rotation axes, and
//! the current value of every coordinate. The exporter treats it as a
//! read-only data source.

use std::collections::HashMap;
use std::path::Path;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Joints carrying fewer properties than this are fixed/welded and expose no
/// live spatial-transform slots
pub const MIN_JOINT_PROPERTIES: u32 = 6;

/// A posed skeletal model: bodies, joints, and one coordinate snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    /// All bodies, in model order
    pub bodies: Vec<Body>,
    /// The ground segment; defines the world frame
    #[serde(default)]
    pub ground: Ground,
    /// All joints, in model order
    #[serde(default)]
    pub joints: Vec<Joint>,
    /// Coordinate name -> current value (radians for rotational coordinates)
    #[serde(default)]
    pub coordinates: HashMap<String, f64>,
}

impl Model {
    /// Load a model snapshot from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io(e.to_string()))?;
        Self::load_from_str(&content)
    }

    /// Parse a model snapshot from RON text
    pub fn load_from_str(content: &str) -> Result<Self, ModelError> {
        ron::from_str(content).map_err(|e| ModelError::Deserialize(e.to_string()))
    }
}

/// A rigid segment with its world-frame pose from the model's solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Mesh file in the model's geometry directory, if any
    #[serde(default)]
    pub attached_mesh: Option<String>,
    pub world_position: DVec3,
    pub world_rotation: DMat3,
}

/// The ground segment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ground {
    #[serde(default)]
    pub attached_mesh: Option<String>,
}

/// A kinematic connector between a parent body and a child body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Joint {
    pub name: String,
    /// Property count as declared by the modeling engine
    pub num_properties: u32,
    /// Names of the coordinates this joint exposes
    #[serde(default)]
    pub coordinates: Vec<String>,
    pub parent_frame: ParentFrame,
    /// Rotational spatial-transform slots, in declaration order
    pub spatial_transform: [TransformSlot; 3],
}

/// Where the joint attaches on its parent body, in world coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentFrame {
    pub parent_body: String,
    pub position: DVec3,
}

/// One rotational spatial-transform slot: a declared rotation axis in the
/// parent body's local frame, optionally bound to a live coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSlot {
    #[serde(default)]
    pub coordinate: Option<String>,
    pub axis: DVec3,
}

/// Model document errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"(
        name: "leg",
        bodies: [
            (
                name: "femur",
                attached_mesh: Some("femur.stl"),
                world_position: (0.0, 1.0, 0.0),
                world_rotation: (1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
            ),
            (
                name: "patella",
                world_position: (0.0, 0.5, 0.1),
                world_rotation: (1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
            ),
        ],
        joints: [
            (
                name: "knee",
                num_properties: 7,
                coordinates: ["knee_angle"],
                parent_frame: (parent_body: "femur", position: (0.0, 0.55, 0.0)),
                spatial_transform: (
                    (coordinate: Some("knee_angle"), axis: (1.0, 0.0, 0.0)),
                    (axis: (0.0, 1.0, 0.0)),
                    (axis: (0.0, 0.0, 1.0)),
                ),
            ),
        ],
        coordinates: {"knee_angle": 0.5},
    )"#;

    #[test]
    fn test_parse_snapshot() {
        let model = Model::load_from_str(SNAPSHOT).unwrap();
        assert_eq!(model.bodies.len(), 2);
        assert_eq!(model.bodies[0].attached_mesh.as_deref(), Some("femur.stl"));
        assert_eq!(model.bodies[1].attached_mesh, None);
        assert_eq!(model.ground.attached_mesh, None);

        let knee = &model.joints[0];
        assert_eq!(knee.parent_frame.parent_body, "femur");
        assert_eq!(knee.spatial_transform[0].coordinate.as_deref(), Some("knee_angle"));
        assert_eq!(knee.spatial_transform[1].coordinate, None);
        assert_eq!(model.coordinates["knee_angle"], 0.5);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(
            Model::load_from_str("not a model"),
            Err(ModelError::Deserialize(_))
        ));
    }
}
