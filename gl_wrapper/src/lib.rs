pub mod geometry;
pub mod program;
pub mod renderer;

/// Two-triangle quad spanning -0.5..0.5, meant to be placed and sized by the
/// model matrix.
#[rustfmt::skip]
pub const UNIT_QUAD: [f32; 12] = [
    -0.5, -0.5,
    0.5, -0.5,
    -0.5, 0.5,
    -0.5, 0.5,
    0.5, -0.5,
    0.5, 0.5,
];
