//! Typed IDs for records delivered by the account-aggregation service.
//!
//! The service hands out opaque string identifiers. Wrapping them keeps a
//! `StreamId` from being passed where an `AccountId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate opaque string ID wrappers.
macro_rules! opaque_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
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
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

opaque_id!(StreamId, "Identifier of a recurring stream.");
opaque_id!(AccountId, "Identifier of a linked bank account.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_as_str() {
        let id = StreamId::new("stream_abc");
        assert_eq!(id.as_str(), "stream_abc");
        assert_eq!(id.to_string(), "stream_abc");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = AccountId::from("acc_1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""acc_1""#);

        let back: AccountId = serde_json::from_str(r#""acc_1""#).unwrap();
        assert_eq!(back, id);
    }
}
