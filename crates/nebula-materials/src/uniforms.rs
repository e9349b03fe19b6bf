//! Std140 packing of a [`MaterialParams`] set into vec4 slots.

use crate::params::{MaterialError, MaterialParams, ParamKind};

/// One vec4 slot of a uniform block.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformSlot {
    /// Parameter name read from the material.
    pub name: &'static str,
    /// Kind the shader expects in this slot.
    pub kind: ParamKind,
    /// Value used while the parameter has never been written.
    pub fallback: [f32; 4],
}

impl UniformSlot {
    /// Scalar slot with a fallback of `default`.
    pub const fn float(name: &'static str, default: f32) -> Self {
        Self {
            name,
            kind: ParamKind::Float,
            fallback: [default, 0.0, 0.0, 0.0],
        }
    }

    /// Vector slot falling back to zero.
    pub const fn vector(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Vector,
            fallback: [0.0; 4],
        }
    }

    /// Colour slot with a fallback of `default`.
    pub const fn color(name: &'static str, default: [f32; 4]) -> Self {
        Self {
            name,
            kind: ParamKind::Color,
            fallback: default,
        }
    }
}

/// Ordered slot list describing a shader's uniform block.
///
/// Every slot occupies 16 bytes regardless of kind, which keeps the layout
/// std140-compatible without per-field padding rules.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformLayout {
    slots: Vec<UniformSlot>,
}

impl UniformLayout {
    /// Build a layout from slots in block order.
    pub fn new(slots: impl Into<Vec<UniformSlot>>) -> Self {
        Self {
            slots: slots.into(),
        }
    }

    /// Slots in block order.
    pub fn slots(&self) -> &[UniformSlot] {
        &self.slots
    }

    /// Size of the packed block in bytes.
    pub fn byte_size(&self) -> usize {
        self.slots.len() * std::mem::size_of::<[f32; 4]>()
    }

    /// Pack `params` into one vec4 per slot.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::KindMismatch`] if a parameter was written with
    /// a different kind than its slot declares.
    pub fn pack(&self, params: &MaterialParams) -> Result<Vec<[f32; 4]>, MaterialError> {
        self.slots
            .iter()
            .map(|slot| match params.get(slot.name) {
                None => Ok(slot.fallback),
                Some(value) if value.kind() == slot.kind => Ok(value.to_vec4()),
                Some(value) => Err(MaterialError::KindMismatch {
                    name: slot.name.to_string(),
                    expected: slot.kind,
                    found: value.kind(),
                }),
            })
            .collect()
    }

    /// Pack `params` and reinterpret the result as bytes ready for upload.
    pub fn pack_bytes(&self, params: &MaterialParams) -> Result<Vec<u8>, MaterialError> {
        let packed = self.pack(params)?;
        Ok(bytemuck::cast_slice(&packed).to_vec())
    }
}
