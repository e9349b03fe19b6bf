//! Named shader parameters: [`ShaderParams`], [`ParamValue`], and
//! [`MaterialParams`].

use std::collections::HashMap;

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ShaderParams
// ---------------------------------------------------------------------------

/// Write access to a material's named shader inputs.
///
/// Effects drive materials only through this trait, so a renderer can hand
/// out its own material handle and tests can record every write.
pub trait ShaderParams {
    /// Set a scalar parameter.
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a 3-component vector parameter (positions, directions).
    fn set_vector(&mut self, name: &str, value: Vec3);

    /// Set a linear RGBA colour parameter.
    fn set_color(&mut self, name: &str, value: [f32; 4]);
}

// ---------------------------------------------------------------------------
// ParamValue
// ---------------------------------------------------------------------------

/// Kind tag of a [`ParamValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Single `f32`.
    Float,
    /// `Vec3`.
    Vector,
    /// RGBA `[f32; 4]`.
    Color,
}

/// A single shader parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Scalar value.
    Float(f32),
    /// Vector value.
    Vector(Vec3),
    /// Linear RGBA colour.
    Color([f32; 4]),
}

impl ParamValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Vector(_) => ParamKind::Vector,
            ParamValue::Color(_) => ParamKind::Color,
        }
    }

    /// The value widened into a vec4 slot (`x`, `xyz` or `xyzw`).
    pub fn to_vec4(&self) -> [f32; 4] {
        match *self {
            ParamValue::Float(v) => [v, 0.0, 0.0, 0.0],
            ParamValue::Vector(v) => [v.x, v.y, v.z, 0.0],
            ParamValue::Color(c) => c,
        }
    }
}

// ---------------------------------------------------------------------------
// MaterialError
// ---------------------------------------------------------------------------

/// Errors from material presets and uniform packing.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// A preset file could not be parsed.
    #[error("failed to parse material preset: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// A parameter holds a different kind than the layout expects.
    #[error("parameter `{name}` is {found:?}, expected {expected:?}")]
    KindMismatch {
        /// Parameter name.
        name: String,
        /// Kind declared by the layout.
        expected: ParamKind,
        /// Kind actually stored.
        found: ParamKind,
    },
}

// ---------------------------------------------------------------------------
// MaterialParams
// ---------------------------------------------------------------------------

/// In-memory parameter set owned by a material instance.
///
/// Every write bumps [`generation`](Self::generation) so an uploader can skip
/// materials that have not changed since the last frame.
#[derive(Component, Clone, Debug, Default, Serialize, Deserialize)]
pub struct MaterialParams {
    values: HashMap<String, ParamValue>,
    #[serde(skip)]
    generation: u64,
}

impl MaterialParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load authored defaults from a RON map of name to value, e.g.
    /// `(values: {"_NoiseScale": Float(4.0)})`.
    pub fn from_ron(ron_str: &str) -> Result<Self, MaterialError> {
        Ok(ron::from_str(ron_str)?)
    }

    /// Raw value of a parameter.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    /// Scalar value, if `name` is set and holds a float.
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            ParamValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Vector value, if `name` is set and holds a vector.
    pub fn vector(&self, name: &str) -> Option<Vec3> {
        match self.get(name)? {
            ParamValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Colour value, if `name` is set and holds a colour.
    pub fn color(&self, name: &str) -> Option<[f32; 4]> {
        match self.get(name)? {
            ParamValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Number of distinct parameters set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write counter, incremented on every set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn insert(&mut self, name: &str, value: ParamValue) {
        self.values.insert(name.to_string(), value);
        self.generation += 1;
    }
}

impl ShaderParams for MaterialParams {
    fn set_float(&mut self, name: &str, value: f32) {
        self.insert(name, ParamValue::Float(value));
    }

    fn set_vector(&mut self, name: &str, value: Vec3) {
        self.insert(name, ParamValue::Vector(value));
    }

    fn set_color(&mut self, name: &str, value: [f32; 4]) {
        self.insert(name, ParamValue::Color(value));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
