//! Material parameter sets: the named shader inputs effects write each frame,
//! RON presets for authored defaults, and std140 packing for upload.

mod params;
mod uniforms;

pub use params::{MaterialError, MaterialParams, ParamKind, ParamValue, ShaderParams};
pub use uniforms::{UniformLayout, UniformSlot};
