//! Geometry assembly and STL export

use std::path::PathBuf;

use tracing::{debug, info};

use crate::mesh::TriangleMesh;
use crate::model::Model;
use crate::placement::{MeshReference, PlacementError, resolve_bodies, resolve_joint_axes};
use crate::primitive::{arrow_proxy, cube_proxy};
use crate::stl::{StlError, load_stl, save_stl_ascii};

/// Options for STL export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output directory
    pub output_dir: PathBuf,
    /// Directory holding the model's mesh assets
    pub geometry_dir: PathBuf,
    /// Export only proxy parts, skipping real mesh assets
    pub joints_only: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            geometry_dir: PathBuf::from("Geometry"),
            joints_only: false,
        }
    }
}

/// Export every body, joint-axis proxy, and the ground to individual ASCII
/// STL files plus one combined mesh
///
/// Any failure aborts the run before `combined_mesh.stl` is written; part
/// files already written remain on disk and are each independently valid.
pub fn export_model(model: &Model, options: &ExportOptions) -> Result<(), ExportError> {
    std::fs::create_dir_all(&options.output_dir)
        .map_err(|e| ExportError::OutputDir(e.to_string()))?;

    let bodies = resolve_bodies(model);
    let joints = resolve_joint_axes(model, &bodies)?;

    info!("Converting {} bodies...", bodies.len());

    let mut combined = Vec::new();
    for part in bodies.iter().chain(joints.iter()) {
        let Some(mesh) = resolve_mesh(&part.mesh, options)? else {
            debug!(part = %part.name, "skipped (joints-only)");
            continue;
        };

        info!("Processing: {}", part.name);
        let transformed = mesh.transformed(&part.transform);
        save_stl_ascii(
            &transformed,
            options.output_dir.join(format!("{}.stl", part.name)),
        )?;
        combined.push(transformed);
    }

    // The ground defines the world frame; there is no transform to apply
    let ground = ground_mesh(model, options)?;
    save_stl_ascii(&ground, options.output_dir.join("ground_mesh.stl"))?;
    combined.push(ground);

    info!("Exporting Combined Mesh...");
    let merged = TriangleMesh::concatenate(&combined);
    save_stl_ascii(&merged, options.output_dir.join("combined_mesh.stl"))?;

    Ok(())
}

/// Resolve a mesh reference to loaded geometry
///
/// Returns `None` for real mesh assets filtered out by joints-only mode.
fn resolve_mesh(
    reference: &MeshReference,
    options: &ExportOptions,
) -> Result<Option<TriangleMesh>, ExportError> {
    match reference {
        MeshReference::Asset(_) if options.joints_only => Ok(None),
        MeshReference::Asset(file) => Ok(Some(load_stl(options.geometry_dir.join(file))?)),
        MeshReference::CubeProxy => Ok(Some(cube_proxy())),
        MeshReference::ArrowProxy => Ok(Some(arrow_proxy())),
    }
}

fn ground_mesh(model: &Model, options: &ExportOptions) -> Result<TriangleMesh, ExportError> {
    match &model.ground.attached_mesh {
        Some(file) if !options.joints_only => {
            Ok(load_stl(options.geometry_dir.join(file))?)
        }
        _ => Ok(cube_proxy()),
    }
}

/// Export-stage errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot create output directory: {0}")]
    OutputDir(String),
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Stl(#[from] StlError),
}
