//! Procedural proxy mesh generation
//!
//! Generates the stand-in geometry used when a part has no mesh of its own:
//! - Cube: bodies without attached geometry
//! - Arrow: joint rotation axes (cylinder shaft plus cone head along +Z)

use std::f64::consts::PI;

use glam::DVec3;

use crate::constants::{
    ARROW_HEAD_LENGTH, ARROW_HEAD_RADIUS, ARROW_SEGMENTS, ARROW_SHAFT_LENGTH, ARROW_SHAFT_RADIUS,
    CUBE_PROXY_SIZE,
};
use crate::mesh::{Triangle, TriangleMesh};

/// Generate the cube proxy: 12 triangles, centered at the origin
pub fn cube_proxy() -> TriangleMesh {
    let h = CUBE_PROXY_SIZE / 2.0;
    let mut triangles = Vec::with_capacity(12);

    // Helper to add a face as two triangles
    let mut add_face = |corners: [DVec3; 4], normal: DVec3| {
        triangles.push(Triangle {
            normal,
            vertices: [corners[0], corners[1], corners[2]],
        });
        triangles.push(Triangle {
            normal,
            vertices: [corners[0], corners[2], corners[3]],
        });
    };

    // +X face
    add_face(
        [
            DVec3::new(h, -h, -h),
            DVec3::new(h, h, -h),
            DVec3::new(h, h, h),
            DVec3::new(h, -h, h),
        ],
        DVec3::X,
    );

    // -X face
    add_face(
        [
            DVec3::new(-h, h, -h),
            DVec3::new(-h, -h, -h),
            DVec3::new(-h, -h, h),
            DVec3::new(-h, h, h),
        ],
        DVec3::NEG_X,
    );

    // +Y face
    add_face(
        [
            DVec3::new(h, h, -h),
            DVec3::new(-h, h, -h),
            DVec3::new(-h, h, h),
            DVec3::new(h, h, h),
        ],
        DVec3::Y,
    );

    // -Y face
    add_face(
        [
            DVec3::new(-h, -h, -h),
            DVec3::new(h, -h, -h),
            DVec3::new(h, -h, h),
            DVec3::new(-h, -h, h),
        ],
        DVec3::NEG_Y,
    );

    // +Z face (top)
    add_face(
        [
            DVec3::new(-h, -h, h),
            DVec3::new(h, -h, h),
            DVec3::new(h, h, h),
            DVec3::new(-h, h, h),
        ],
        DVec3::Z,
    );

    // -Z face (bottom)
    add_face(
        [
            DVec3::new(-h, h, -h),
            DVec3::new(h, h, -h),
            DVec3::new(h, -h, -h),
            DVec3::new(-h, -h, -h),
        ],
        DVec3::NEG_Z,
    );

    TriangleMesh::new(triangles)
}

/// Generate the arrow proxy along +Z, shaft base at the origin
///
/// Shaft wall, shaft bottom cap, head base disc, and head cone:
/// 5 * [`ARROW_SEGMENTS`] triangles in total.
pub fn arrow_proxy() -> TriangleMesh {
    let segments = ARROW_SEGMENTS;
    let tip = DVec3::new(0.0, 0.0, ARROW_SHAFT_LENGTH + ARROW_HEAD_LENGTH);
    let head_base_center = DVec3::new(0.0, 0.0, ARROW_SHAFT_LENGTH);

    let mut triangles = Vec::with_capacity(5 * segments as usize);

    let ring = |radius: f64, z: f64, i: u32| {
        let theta = (f64::from(i) / f64::from(segments)) * 2.0 * PI;
        DVec3::new(radius * theta.cos(), radius * theta.sin(), z)
    };

    for i in 0..segments {
        let b0 = ring(ARROW_SHAFT_RADIUS, 0.0, i);
        let b1 = ring(ARROW_SHAFT_RADIUS, 0.0, i + 1);
        let t0 = ring(ARROW_SHAFT_RADIUS, ARROW_SHAFT_LENGTH, i);
        let t1 = ring(ARROW_SHAFT_RADIUS, ARROW_SHAFT_LENGTH, i + 1);

        // Shaft wall
        triangles.push(Triangle::from_vertices(b0, b1, t1));
        triangles.push(Triangle::from_vertices(b0, t1, t0));

        // Shaft bottom cap (faces -Z)
        triangles.push(Triangle {
            normal: DVec3::NEG_Z,
            vertices: [DVec3::ZERO, b1, b0],
        });

        // Head base disc (faces -Z)
        let h0 = ring(ARROW_HEAD_RADIUS, ARROW_SHAFT_LENGTH, i);
        let h1 = ring(ARROW_HEAD_RADIUS, ARROW_SHAFT_LENGTH, i + 1);
        triangles.push(Triangle {
            normal: DVec3::NEG_Z,
            vertices: [head_base_center, h1, h0],
        });

        // Head cone
        triangles.push(Triangle::from_vertices(h0, h1, tip));
    }

    TriangleMesh::new(triangles)
}
