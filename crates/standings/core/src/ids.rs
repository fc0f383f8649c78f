//! Identifier newtypes used as map keys and row identities.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Car class identifier as assigned by the racing service.
///
/// `0` is reserved for "unknown / not resolved yet".
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CarClassId(pub u32);

impl CarClassId {
    /// Reserved identifier meaning "no class".
    pub const UNKNOWN: Self = Self(0);

    /// Returns true if this id refers to an actual class.
    #[inline]
    pub const fn is_known(self) -> bool {
        self.0 != Self::UNKNOWN.0
    }
}

impl fmt::Display for CarClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CarClassId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Customer (driver account) identifier. Stable across polls.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustId(pub u64);

impl fmt::Display for CustId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
