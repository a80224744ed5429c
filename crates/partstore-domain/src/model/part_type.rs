//! PartType - What kind of part a supplier delivers
//!
//! PartType is a Value Object - two part types with the same variant are equal.

use serde::{Deserialize, Serialize};

/// The three part kinds the store knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Wheel,
    Door,
    Window,
}

impl PartType {
    /// Wire name of this part type
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Wheel => "wheel",
            PartType::Door => "door",
            PartType::Window => "window",
        }
    }

    /// Get all part types (useful for iteration)
    pub fn all() -> &'static [PartType] {
        &[PartType::Wheel, PartType::Door, PartType::Window]
    }
}

impl core::fmt::Display for PartType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown part type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPartType(pub String);

impl core::fmt::Display for UnknownPartType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown part type '{}'", self.0)
    }
}

impl std::error::Error for UnknownPartType {}

impl core::str::FromStr for PartType {
    type Err = UnknownPartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPartType(s.to_string()))
    }
}
