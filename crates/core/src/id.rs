//! Turtle identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a turtle, stable across saves and renames.
///
/// Time-ordered (UUIDv7) and never drawn from the simulation's entropy
/// source, so seeding the simulation does not fix identities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurtleId(Uuid);

impl TurtleId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TurtleId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TurtleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for TurtleId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for TurtleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s)
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("turtle id {s:?}: {e}")))
    }
}
