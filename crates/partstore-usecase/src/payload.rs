//! Store-parts request payload
//!
//! ```json
//! {
//!   "loader": { "loaderId": "12345", "loaderName": "John Doe" },
//!   "parts": [
//!     { "type": "wheel", "diameter": 22, "material": "rubber" },
//!     { "type": "door", "height": 2.1, "width": 0.9, "material": "steel" },
//!     { "type": "window", "height": 1.2, "width": 1.0, "glassType": "tempered" }
//!   ]
//! }
//! ```

use partstore_domain::PartType;
use serde::{Deserialize, Serialize};

/// Loader id as sent by the caller: a number or a string.
/// It belongs to the caller and is never read as a store supplier id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderId {
    Number(u64),
    Text(String),
}

impl LoaderId {
    /// Lookup key: `12345` and `" 12345"` name the same loader
    pub fn key(&self) -> String {
        match self {
            LoaderId::Number(n) => n.to_string(),
            LoaderId::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderPayload {
    pub loader_id: LoaderId,
    pub loader_name: String,
}

/// One part, tagged by its type. Dimensions are accepted but not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PartPayload {
    Wheel {
        diameter: f64,
        material: String,
    },
    Door {
        height: f64,
        width: f64,
        material: String,
    },
    #[serde(rename_all = "camelCase")]
    Window {
        height: f64,
        width: f64,
        glass_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<String>,
    },
}

impl PartPayload {
    pub fn part_type(&self) -> PartType {
        match self {
            PartPayload::Wheel { .. } => PartType::Wheel,
            PartPayload::Door { .. } => PartType::Door,
            PartPayload::Window { .. } => PartType::Window,
        }
    }

    /// Material to store; a window without one is stored by its glass type
    pub fn material(&self) -> &str {
        match self {
            PartPayload::Wheel { material, .. } | PartPayload::Door { material, .. } => {
                material.as_str()
            }
            PartPayload::Window {
                material,
                glass_type,
                ..
            } => material.as_deref().unwrap_or(glass_type.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePartsRequest {
    pub loader: LoaderPayload,
    pub parts: Vec<PartPayload>,
}

impl StorePartsRequest {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
