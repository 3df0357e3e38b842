//! Strongly-typed identifier value objects.
//!
//! Every persisted entity gets its own UUID newtype so a club id can never be
//! handed to an event lookup. All ids parse from their string form with
//! `FromStr`; a parse failure at the HTTP boundary becomes a 400, never a
//! panic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an id from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a user.
    UserId
}

uuid_id! {
    /// Unique identifier for a club.
    ClubId
}

uuid_id! {
    /// Unique identifier for an event.
    EventId
}

uuid_id! {
    /// Unique identifier for a club membership.
    MembershipId
}

uuid_id! {
    /// Unique identifier for an event registration.
    RegistrationId
}

uuid_id! {
    /// Unique identifier for a recorded payment.
    PaymentId
}
