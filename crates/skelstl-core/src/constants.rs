//! Global constants for skelstl-core

use glam::DVec3;

/// Edge length of the cube proxy used for bodies without attached geometry
pub const CUBE_PROXY_SIZE: f64 = 0.05;

/// Number of radial segments for the arrow proxy shaft and head
pub const ARROW_SEGMENTS: u32 = 32;

/// Arrow proxy shaft radius
pub const ARROW_SHAFT_RADIUS: f64 = 0.005;

/// Arrow proxy shaft length
pub const ARROW_SHAFT_LENGTH: f64 = 0.08;

/// Arrow proxy head radius
pub const ARROW_HEAD_RADIUS: f64 = 0.012;

/// Arrow proxy head length
pub const ARROW_HEAD_LENGTH: f64 = 0.03;

/// Long axis of the arrow proxy in its local frame; joint-axis alignment and
/// the live coordinate rotation are both expressed relative to this axis
pub const CANONICAL_AXIS: DVec3 = DVec3::Z;
