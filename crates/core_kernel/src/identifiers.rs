//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are assigned by the store as 64-bit integers. Wrapping them in
//! newtypes prevents passing a policy id where a car id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store-assigned identifier
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the prefix accepted when parsing
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(CarId, "CAR");
define_id!(OwnerId, "OWN");
define_id!(PolicyId, "POL");
define_id!(ClaimId, "CLM");
