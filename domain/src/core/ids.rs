//! Identifier value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier without validation.
            ///
            /// Prefer [`Self::try_new`] for values coming from callers.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Create a new identifier, rejecting empty or whitespace-only values.
            pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    Err(DomainError::InvalidId(format!("{} must not be empty", $label)))
                } else {
                    Ok(Self(value))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Unique identifier of a customer review
    ReviewId,
    "review id"
);

string_id!(
    /// Identifier of the business (tenant) that owns reviews and settings
    BusinessId,
    "business id"
);
