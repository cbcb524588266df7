//! GLSL sources for the flat-color pipeline shared by every binary.
//!
//! The vertex stage transforms 2D positions by `projection * model`, the
//! fragment stage fills with the `flat_color` uniform.

pub const FLAT_VERT: &str = include_str!("shaders/flat.vert");
pub const FLAT_FRAG: &str = include_str!("shaders/flat.frag");
