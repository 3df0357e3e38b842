//! Membership and registration handlers plus ledger queries.

mod join_club;
mod queries;
mod register_for_event;
mod set_membership_status;

pub use join_club::{JoinClubCommand, JoinClubHandler, JoinOutcome};
pub use queries::MembershipQueries;
pub use register_for_event::{
    RegisterForEventCommand, RegisterForEventHandler, RegistrationOutcome,
};
pub use set_membership_status::{SetMembershipStatusCommand, SetMembershipStatusHandler};
