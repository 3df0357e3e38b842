//! Foundation value objects shared across the domain.

mod auth;
mod authorization;
mod email;
mod errors;
mod ids;
mod money;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use authorization::{Role, RoleRequirement};
pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClubId, EventId, MembershipId, PaymentId, RegistrationId, UserId};
pub use money::Money;
pub use timestamp::Timestamp;
