//! Per-face buffer sizes. Every emitted face is an unwelded quad.

pub const VERTS_PER_FACE: usize = 4;
pub const FLOATS_PER_FACE: usize = VERTS_PER_FACE * 3;
pub const INDICES_PER_FACE: usize = 6;
pub const TRIANGLES_PER_FACE: usize = 2;
