//! Data structures produced by the decoder

mod core;
mod material;

// Re-export all public types from core module
pub use core::{
    Document, Face, FaceCorner, NORMAL_COMPONENTS, Object, OrphanPolicy, ParserConfig,
    UV_COMPONENTS, VERTEX_COMPONENTS,
};

// Re-export all public types from material module
pub use material::{Material, MaterialTable, Rgb};
