//! Strongly-typed identifier value objects.
//!
//! Every entity and sub-entity gets a short, opaque string identifier.
//! Identifiers are drawn from a UUIDv4 and rendered in base 36, which keeps
//! them URL-safe and short enough to read out of an invitation link.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Length of generated identifiers.
pub const SHORT_ID_LENGTH: usize = 12;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short, practically-unique opaque identifier.
///
/// 12 base-36 digits carry roughly 62 bits of the UUID's randomness.
pub fn generate_short_id() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut out = [0u8; SHORT_ID_LENGTH];
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    out.iter().map(|b| *b as char).collect()
}

macro_rules! short_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a fresh identifier.
            pub fn generate() -> Self {
                Self(generate_short_id())
            }

            /// Wraps an identifier received from a caller or a stored record.
            pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

short_id!(
    /// Unique identifier for an offer request.
    OfferRequestId,
    "offer_request_id"
);

short_id!(
    /// Unique identifier for a company invited to a request.
    CompanyId,
    "company_id"
);

short_id!(
    /// Unique identifier for an offer submission.
    OfferSubmissionId,
    "offer_submission_id"
);

short_id!(
    /// Unique identifier for a submission attachment.
    AttachmentId,
    "attachment_id"
);
