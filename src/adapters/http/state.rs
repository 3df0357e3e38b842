//! Shared application state for the HTTP layer.
//!
//! Holds every port behind an `Arc` plus the checkout settings; cloned per
//! request, handlers are constructed on demand.

use std::sync::Arc;

use crate::application::handlers::checkout::{
    CheckoutSettings, ConfirmClubCheckoutHandler, ConfirmEventCheckoutHandler,
};
use crate::application::handlers::club::{
    ClubQueries, CreateClubHandler, DeleteClubHandler, ModerateClubHandler, UpdateClubHandler,
};
use crate::application::handlers::event::{
    CreateEventHandler, DeleteEventHandler, EventQueries, UpdateEventHandler,
};
use crate::application::handlers::membership::{
    JoinClubHandler, MembershipQueries, RegisterForEventHandler, SetMembershipStatusHandler,
};
use crate::application::handlers::reporting::ReportingQueries;
use crate::application::handlers::user::{SetUserRoleHandler, UpsertUserHandler};
use crate::ports::{
    CheckoutProvider, ClubRepository, EventRepository, LedgerReader, MembershipRepository,
    PaymentLedger, RegistrationRepository, ReportingReader, UserRepository,
};

/// Port wiring shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub clubs: Arc<dyn ClubRepository>,
    pub events: Arc<dyn EventRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub ledger_reader: Arc<dyn LedgerReader>,
    pub payment_ledger: Arc<dyn PaymentLedger>,
    pub checkout_provider: Arc<dyn CheckoutProvider>,
    pub reporting: Arc<dyn ReportingReader>,
    pub checkout_settings: CheckoutSettings,
}

impl AppState {
    pub fn upsert_user_handler(&self) -> UpsertUserHandler {
        UpsertUserHandler::new(self.users.clone())
    }

    pub fn set_user_role_handler(&self) -> SetUserRoleHandler {
        SetUserRoleHandler::new(self.users.clone())
    }

    pub fn create_club_handler(&self) -> CreateClubHandler {
        CreateClubHandler::new(self.clubs.clone())
    }

    pub fn update_club_handler(&self) -> UpdateClubHandler {
        UpdateClubHandler::new(self.clubs.clone())
    }

    pub fn moderate_club_handler(&self) -> ModerateClubHandler {
        ModerateClubHandler::new(self.clubs.clone())
    }

    pub fn delete_club_handler(&self) -> DeleteClubHandler {
        DeleteClubHandler::new(self.clubs.clone())
    }

    pub fn club_queries(&self) -> ClubQueries {
        ClubQueries::new(self.clubs.clone(), self.events.clone())
    }

    pub fn create_event_handler(&self) -> CreateEventHandler {
        CreateEventHandler::new(self.clubs.clone(), self.events.clone())
    }

    pub fn update_event_handler(&self) -> UpdateEventHandler {
        UpdateEventHandler::new(self.events.clone())
    }

    pub fn delete_event_handler(&self) -> DeleteEventHandler {
        DeleteEventHandler::new(self.events.clone())
    }

    pub fn event_queries(&self) -> EventQueries {
        EventQueries::new(self.events.clone())
    }

    pub fn join_club_handler(&self) -> JoinClubHandler {
        JoinClubHandler::new(
            self.clubs.clone(),
            self.memberships.clone(),
            self.checkout_provider.clone(),
            self.checkout_settings.clone(),
        )
    }

    pub fn register_for_event_handler(&self) -> RegisterForEventHandler {
        RegisterForEventHandler::new(
            self.events.clone(),
            self.memberships.clone(),
            self.registrations.clone(),
            self.checkout_provider.clone(),
            self.checkout_settings.clone(),
        )
    }

    pub fn set_membership_status_handler(&self) -> SetMembershipStatusHandler {
        SetMembershipStatusHandler::new(self.memberships.clone(), self.clubs.clone())
    }

    pub fn membership_queries(&self) -> MembershipQueries {
        MembershipQueries::new(self.ledger_reader.clone(), self.clubs.clone())
    }

    pub fn confirm_club_checkout_handler(&self) -> ConfirmClubCheckoutHandler {
        ConfirmClubCheckoutHandler::new(self.checkout_provider.clone(), self.payment_ledger.clone())
    }

    pub fn confirm_event_checkout_handler(&self) -> ConfirmEventCheckoutHandler {
        ConfirmEventCheckoutHandler::new(
            self.checkout_provider.clone(),
            self.payment_ledger.clone(),
        )
    }

    pub fn reporting_queries(&self) -> ReportingQueries {
        ReportingQueries::new(self.reporting.clone())
    }
}
