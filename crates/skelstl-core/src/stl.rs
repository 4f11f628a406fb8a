//! STL loading and ASCII export

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use glam::DVec3;

use crate::mesh::{Triangle, TriangleMesh};

/// Load an STL file (binary or ASCII) as a triangle soup
pub fn load_stl(path: impl AsRef<Path>) -> Result<TriangleMesh, StlError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::AssetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e.to_string())
        }
    })?;
    let mut reader = BufReader::new(file);

    let mesh = stl_io::read_stl(&mut reader).map_err(|e| StlError::Parse(e.to_string()))?;

    let mut triangles = Vec::with_capacity(mesh.faces.len());
    for face in &mesh.faces {
        let vertex = |i: usize| {
            let v = mesh.vertices[face.vertices[i]];
            DVec3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]))
        };
        triangles.push(Triangle {
            normal: DVec3::new(
                f64::from(face.normal[0]),
                f64::from(face.normal[1]),
                f64::from(face.normal[2]),
            ),
            vertices: [vertex(0), vertex(1), vertex(2)],
        });
    }

    Ok(TriangleMesh::new(triangles))
}

/// Save a triangle soup as an ASCII STL file
pub fn save_stl_ascii(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<(), StlError> {
    let file =
        File::create(path.as_ref()).map_err(|e| StlError::OutputWrite(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    write_ascii(mesh, &mut writer).map_err(|e| StlError::OutputWrite(e.to_string()))
}

fn write_ascii<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "solid mesh")?;

    for triangle in mesh.triangles() {
        let n = triangle.normal;
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in &triangle.vertices {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid mesh")?;
    Ok(())
}

/// STL codec errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("Mesh asset not found: {path}")]
    AssetNotFound { path: PathBuf },
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Write error: {0}")]
    OutputWrite(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::cube_proxy;

    #[test]
    fn test_ascii_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.stl");

        let cube = cube_proxy();
        save_stl_ascii(&cube, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("solid"));
        assert_eq!(content.matches("facet normal").count(), 12);

        let loaded = load_stl(&path).unwrap();
        assert_eq!(loaded.triangle_count(), cube.triangle_count());
        for (a, b) in loaded.triangles().iter().zip(cube.triangles()) {
            for (va, vb) in a.vertices.iter().zip(b.vertices) {
                assert!((*va - vb).length() < 1e-5);
            }
        }
    }

    #[test]
    fn test_missing_asset() {
        let result = load_stl("no_such_mesh.stl");
        assert!(matches!(result, Err(StlError::AssetNotFound { .. })));
    }
}
