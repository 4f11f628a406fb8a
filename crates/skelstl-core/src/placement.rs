//! World-frame placement of bodies and joint-axis proxies
//!
//! Both resolvers are pure functions over the model snapshot, returning
//! immutable sequences of [`NamedTransform`] that the export stage consumes.

use glam::{DMat3, DMat4, DVec3};
use tracing::debug;

use crate::constants::CANONICAL_AXIS;
use crate::model::{MIN_JOINT_PROPERTIES, Model};
use crate::transform::{TransformError, normalize, rotation_about_axis, rotation_aligning};

/// Which mesh asset a placement resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshReference {
    /// A mesh file in the model's geometry directory
    Asset(String),
    /// Cube stand-in for a body without attached geometry
    CubeProxy,
    /// Arrow stand-in for a joint rotation axis
    ArrowProxy,
}

/// A named part with its world-frame rigid transform
#[derive(Debug, Clone)]
pub struct NamedTransform {
    pub name: String,
    pub mesh: MeshReference,
    pub transform: DMat4,
}

/// Assemble `[R | p; 0 0 0 1]` from a rotation block and a translation
fn rigid(rotation: DMat3, translation: DVec3) -> DMat4 {
    let mut transform = DMat4::from_mat3(rotation);
    transform.w_axis = translation.extend(1.0);
    transform
}

/// One placement per body, directly from the solver-supplied pose
pub fn resolve_bodies(model: &Model) -> Vec<NamedTransform> {
    model
        .bodies
        .iter()
        .map(|body| NamedTransform {
            name: body.name.clone(),
            mesh: match &body.attached_mesh {
                Some(file) => MeshReference::Asset(file.clone()),
                None => MeshReference::CubeProxy,
            },
            transform: rigid(body.world_rotation, body.world_position),
        })
        .collect()
}

/// One placement per active rotational joint coordinate
///
/// For each live slot the proxy is aligned from its canonical axis onto the
/// joint's declared axis in parent-body space, then rotated by the current
/// coordinate value, then carried into the world frame by the parent body's
/// orientation. The composition order `R_body * R_align * R_coord` must not
/// be reordered; the reverse places the proxy visibly wrong without failing.
pub fn resolve_joint_axes(
    model: &Model,
    bodies: &[NamedTransform],
) -> Result<Vec<NamedTransform>, PlacementError> {
    let mut placements = Vec::new();

    for joint in &model.joints {
        if joint.num_properties < MIN_JOINT_PROPERTIES || joint.coordinates.is_empty() {
            debug!(joint = %joint.name, "skipping welded joint");
            continue;
        }

        let parent = bodies
            .iter()
            .find(|body| body.name == joint.parent_frame.parent_body)
            .ok_or_else(|| PlacementError::UnresolvedParent {
                joint: joint.name.clone(),
                body: joint.parent_frame.parent_body.clone(),
            })?;
        let r_body = DMat3::from_mat4(parent.transform);
        let pivot = joint.parent_frame.position;

        for slot in &joint.spatial_transform {
            let Some(coordinate) = &slot.coordinate else {
                continue;
            };
            let theta = *model
                .coordinates
                .get(coordinate)
                .ok_or_else(|| PlacementError::UnknownCoordinate(coordinate.clone()))?;
            let axis = normalize(slot.axis)?;

            debug!(joint = %joint.name, %coordinate, theta, "placing joint axis");
            let r_coord = DMat3::from_mat4(rotation_about_axis(theta, CANONICAL_AXIS)?);
            let r_align = rotation_aligning(CANONICAL_AXIS, axis);

            placements.push(NamedTransform {
                name: format!("joint-{coordinate}"),
                mesh: MeshReference::ArrowProxy,
                transform: rigid(r_body * r_align * r_coord, pivot),
            });
        }
    }

    Ok(placements)
}

/// Placement resolution errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlacementError {
    #[error("Joint {joint} references unknown parent body: {body}")]
    UnresolvedParent { joint: String, body: String },
    #[error("Unknown coordinate: {0}")]
    UnknownCoordinate(String),
    #[error(transparent)]
    Transform(#[from] TransformError),
}
