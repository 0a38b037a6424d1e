//! Error types

use std::fmt;

use thiserror::Error;

/// Which entity collection an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Enemy,
    Bullet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Enemy => write!(f, "enemy"),
            EntityKind::Bullet => write!(f, "bullet"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{kind} index {index} out of bounds (count {len})")]
    IndexOutOfBounds {
        kind: EntityKind,
        index: usize,
        len: usize,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(target_arch = "wasm32")]
impl From<SimError> for wasm_bindgen::JsValue {
    fn from(err: SimError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
