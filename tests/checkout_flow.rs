//! End-to-end checkout flow over in-memory ports: free joins write directly,
//! paid joins round-trip through the provider, and confirmation commits are
//! idempotent on the session id.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use club_sphere::application::handlers::checkout::{
    CheckoutSettings, ConfirmClubCheckoutCommand, ConfirmClubCheckoutHandler,
    ConfirmEventCheckoutCommand, ConfirmEventCheckoutHandler,
};
use club_sphere::application::handlers::membership::{
    JoinClubCommand, JoinClubHandler, JoinOutcome, RegisterForEventCommand,
    RegisterForEventHandler, RegistrationOutcome,
};
use club_sphere::domain::club::{Club, ClubStatus, NewClub};
use club_sphere::domain::event::{Event, EventPricing, NewEvent};
use club_sphere::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, EventId, MembershipId, Money, RegistrationId,
    Timestamp,
};
use club_sphere::domain::membership::{
    EventRegistration, Membership, MembershipStatus, RegistrationStatus,
};
use club_sphere::domain::payment::Payment;
use club_sphere::ports::{
    CheckoutError, CheckoutKind, CheckoutMetadata, CheckoutProvider, CheckoutSession, ClubFilter,
    ClubRepository, ClubSort, CommitOutcome, CreateCheckoutSession, EventRepository,
    MembershipRepository, PaymentLedger, RegistrationRepository, RetrievedCheckout,
    SessionPaymentStatus,
};

fn email(raw: &str) -> EmailAddress {
    EmailAddress::parse(raw).unwrap()
}

fn approved_club(fee_cents: i64) -> Club {
    let mut club = Club::create(NewClub {
        name: "Chess Circle".to_string(),
        description: "Weekly games".to_string(),
        category: "games".to_string(),
        location: "Hall B".to_string(),
        banner_image: "https://img.example/chess.png".to_string(),
        membership_fee: Money::from_cents(fee_cents).unwrap(),
        manager_email: email("manager@clubs.example"),
    })
    .unwrap();
    club.moderate(ClubStatus::Approved).unwrap();
    club
}

fn upcoming_event(club_id: ClubId, pricing: EventPricing, capacity: Option<u32>) -> Event {
    Event::create(NewEvent {
        title: "Open Tournament".to_string(),
        description: "All levels welcome".to_string(),
        starts_at: Timestamp::now().add_days(7),
        location: "Hall B".to_string(),
        pricing,
        capacity,
        club_id,
        manager_email: email("manager@clubs.example"),
    })
    .unwrap()
}

#[derive(Default)]
struct InMemoryClubs {
    clubs: Mutex<Vec<Club>>,
}

impl InMemoryClubs {
    fn with_club(club: Club) -> Self {
        Self { clubs: Mutex::new(vec![club]) }
    }
}

#[async_trait]
impl ClubRepository for InMemoryClubs {
    async fn insert(&self, club: &Club) -> Result<(), DomainError> {
        self.clubs.lock().unwrap().push(club.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        Ok(self.clubs.lock().unwrap().iter().find(|c| c.id == *id).cloned())
    }

    async fn list(&self, _filter: &ClubFilter, _sort: ClubSort) -> Result<Vec<Club>, DomainError> {
        Ok(self.clubs.lock().unwrap().clone())
    }

    async fn update(&self, club: &Club) -> Result<(), DomainError> {
        let mut clubs = self.clubs.lock().unwrap();
        match clubs.iter_mut().find(|c| c.id == club.id) {
            Some(slot) => {
                *slot = club.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::ClubNotFound, "Club not found")),
        }
    }

    async fn delete(&self, id: &ClubId) -> Result<(), DomainError> {
        self.clubs.lock().unwrap().retain(|c| c.id != *id);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryEvents {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEvents {
    fn with_event(event: Event) -> Self {
        Self { events: Mutex::new(vec![event]) }
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn insert(&self, event: &Event) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.events.lock().unwrap().iter().find(|e| e.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.club_id == *club_id)
            .cloned()
            .collect())
    }

    async fn count_upcoming(&self, club_id: &ClubId) -> Result<i64, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.club_id == *club_id && e.is_upcoming())
            .count() as i64)
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let mut events = self.events.lock().unwrap();
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::EventNotFound, "Event not found")),
        }
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        self.events.lock().unwrap().retain(|e| e.id != *id);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryMemberships {
    memberships: Mutex<Vec<Membership>>,
}

impl InMemoryMemberships {
    fn with_membership(membership: Membership) -> Self {
        Self { memberships: Mutex::new(vec![membership]) }
    }

    fn stored(&self) -> Vec<Membership> {
        self.memberships.lock().unwrap().clone()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMemberships {
    async fn insert(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut memberships = self.memberships.lock().unwrap();
        let duplicate = memberships.iter().any(|m| {
            m.user_email == membership.user_email
                && m.club_id == membership.club_id
                && m.is_active()
        });
        if duplicate {
            return Err(DomainError::new(ErrorCode::AlreadyMember, "Already a member"));
        }
        memberships.push(membership.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == *id)
            .cloned())
    }

    async fn find_active(
        &self,
        user_email: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.user_email == *user_email && m.club_id == *club_id && m.is_active())
            .cloned())
    }

    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<(), DomainError> {
        let mut memberships = self.memberships.lock().unwrap();
        match memberships.iter_mut().find(|m| m.id == *id) {
            Some(membership) => {
                membership.status = status;
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            )),
        }
    }
}

#[derive(Default)]
struct InMemoryRegistrations {
    registrations: Mutex<Vec<EventRegistration>>,
}

impl InMemoryRegistrations {
    fn with_registration(registration: EventRegistration) -> Self {
        Self { registrations: Mutex::new(vec![registration]) }
    }

    fn stored(&self) -> Vec<EventRegistration> {
        self.registrations.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrations {
    async fn insert(&self, registration: &EventRegistration) -> Result<(), DomainError> {
        let mut registrations = self.registrations.lock().unwrap();
        let duplicate = registrations.iter().any(|r| {
            r.user_email == registration.user_email
                && r.event_id == registration.event_id
                && r.is_live()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::AlreadyRegistered,
                "Already registered",
            ));
        }
        registrations.push(registration.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<EventRegistration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn find_live(
        &self,
        user_email: &EmailAddress,
        event_id: &EventId,
    ) -> Result<Option<EventRegistration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_email == *user_email && r.event_id == *event_id && r.is_live())
            .cloned())
    }

    async fn count_live(&self, event_id: &EventId) -> Result<i64, DomainError> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id == *event_id && r.is_live())
            .count() as i64)
    }

    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
    ) -> Result<(), DomainError> {
        let mut registrations = self.registrations.lock().unwrap();
        match registrations.iter_mut().find(|r| r.id == *id) {
            Some(registration) => {
                registration.status = status;
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Registration not found",
            )),
        }
    }
}

/// Provider stub: opened sessions become retrievable as paid.
#[derive(Default)]
struct RecordingProvider {
    sessions: Mutex<Vec<RetrievedCheckout>>,
    next_id: Mutex<u64>,
}

impl RecordingProvider {
    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl CheckoutProvider for RecordingProvider {
    async fn create_session(
        &self,
        request: CreateCheckoutSession,
    ) -> Result<CheckoutSession, CheckoutError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = format!("cs_test_{}", *next_id);

        self.sessions.lock().unwrap().push(RetrievedCheckout {
            id: id.clone(),
            payment_status: SessionPaymentStatus::Paid,
            amount_total: request.amount,
            metadata: Some(request.metadata),
        });

        Ok(CheckoutSession {
            url: format!("https://checkout.example/{id}"),
            id,
        })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<RetrievedCheckout, CheckoutError> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .ok_or_else(|| CheckoutError::SessionNotFound(session_id.to_string()))
    }
}

/// Ledger stub: commits keyed by the payment's transaction id.
#[derive(Default)]
struct InMemoryLedger {
    payments: Mutex<Vec<Payment>>,
    memberships: Mutex<Vec<Membership>>,
    registrations: Mutex<Vec<EventRegistration>>,
}

impl InMemoryLedger {
    fn payment_count(&self) -> usize {
        self.payments.lock().unwrap().len()
    }

    fn membership_count(&self) -> usize {
        self.memberships.lock().unwrap().len()
    }

    fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryLedger {
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payment>, DomainError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.transaction_id == transaction_id)
            .cloned())
    }

    async fn commit_club_membership(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<CommitOutcome, DomainError> {
        let mut payments = self.payments.lock().unwrap();
        if payments.iter().any(|p| p.transaction_id == payment.transaction_id) {
            return Ok(CommitOutcome::AlreadyConfirmed);
        }
        payments.push(payment.clone());
        self.memberships.lock().unwrap().push(membership.clone());
        Ok(CommitOutcome::Committed)
    }

    async fn commit_event_registration(
        &self,
        payment: &Payment,
        registration: &EventRegistration,
    ) -> Result<CommitOutcome, DomainError> {
        let mut payments = self.payments.lock().unwrap();
        if payments.iter().any(|p| p.transaction_id == payment.transaction_id) {
            return Ok(CommitOutcome::AlreadyConfirmed);
        }
        payments.push(payment.clone());
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(CommitOutcome::Committed)
    }
}

fn settings() -> CheckoutSettings {
    CheckoutSettings {
        currency: "usd".to_string(),
        frontend_origin: "https://clubs.example".to_string(),
    }
}

#[tokio::test]
async fn free_join_never_contacts_the_provider() {
    let club = approved_club(0);
    let club_id = club.id;
    let clubs = Arc::new(InMemoryClubs::with_club(club));
    let memberships = Arc::new(InMemoryMemberships::default());
    let provider = Arc::new(RecordingProvider::default());

    let handler = JoinClubHandler::new(
        clubs,
        memberships.clone(),
        provider.clone(),
        settings(),
    );

    let outcome = handler
        .handle(JoinClubCommand { club_id, caller: email("alice@users.example") })
        .await
        .unwrap();

    assert!(matches!(outcome, JoinOutcome::Joined(_)));
    assert_eq!(memberships.stored().len(), 1);
    assert_eq!(provider.session_count(), 0);
}

#[tokio::test]
async fn paid_join_confirms_exactly_once() {
    let club = approved_club(2500);
    let club_id = club.id;
    let clubs = Arc::new(InMemoryClubs::with_club(club));
    let memberships = Arc::new(InMemoryMemberships::default());
    let provider = Arc::new(RecordingProvider::default());
    let ledger = Arc::new(InMemoryLedger::default());

    let join = JoinClubHandler::new(
        clubs,
        memberships.clone(),
        provider.clone(),
        settings(),
    );

    let session_id = match join
        .handle(JoinClubCommand { club_id, caller: email("alice@users.example") })
        .await
        .unwrap()
    {
        JoinOutcome::CheckoutRequired { session_id, .. } => session_id,
        JoinOutcome::Joined(_) => panic!("paid club joined without checkout"),
    };

    // Nothing is written until the session is confirmed.
    assert!(memberships.stored().is_empty());

    let confirm = ConfirmClubCheckoutHandler::new(provider, ledger.clone());
    let first = confirm
        .handle(ConfirmClubCheckoutCommand {
            session_id: session_id.clone(),
            caller: email("alice@users.example"),
        })
        .await
        .unwrap();

    assert_eq!(first.outcome, CommitOutcome::Committed);
    assert_eq!(first.club_id, club_id);
    assert_eq!(ledger.payment_count(), 1);
    assert_eq!(ledger.membership_count(), 1);

    // Replaying the redirect writes nothing further.
    let second = confirm
        .handle(ConfirmClubCheckoutCommand {
            session_id,
            caller: email("alice@users.example"),
        })
        .await
        .unwrap();

    assert_eq!(second.outcome, CommitOutcome::AlreadyConfirmed);
    assert_eq!(ledger.payment_count(), 1);
    assert_eq!(ledger.membership_count(), 1);
}

#[tokio::test]
async fn event_registration_requires_club_membership() {
    let club = approved_club(0);
    let event = upcoming_event(club.id, EventPricing::Free, None);
    let event_id = event.id;
    let events = Arc::new(InMemoryEvents::with_event(event));
    let memberships = Arc::new(InMemoryMemberships::default());
    let registrations = Arc::new(InMemoryRegistrations::default());
    let provider = Arc::new(RecordingProvider::default());

    let handler = RegisterForEventHandler::new(
        events,
        memberships,
        registrations,
        provider,
        settings(),
    );

    let err = handler
        .handle(RegisterForEventCommand {
            event_id,
            caller: email("stranger@users.example"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NotAMember);
}

#[tokio::test]
async fn full_event_rejects_further_registrations() {
    let club = approved_club(0);
    let club_id = club.id;
    let event = upcoming_event(club_id, EventPricing::Free, Some(1));
    let event_id = event.id;

    let events = Arc::new(InMemoryEvents::with_event(event));
    let memberships = Arc::new(InMemoryMemberships::with_membership(Membership::activate_free(
        email("bob@users.example"),
        club_id,
    )));
    let registrations = Arc::new(InMemoryRegistrations::with_registration(
        EventRegistration::register_free(email("alice@users.example"), event_id, club_id),
    ));
    let provider = Arc::new(RecordingProvider::default());

    let handler = RegisterForEventHandler::new(
        events,
        memberships,
        registrations,
        provider,
        settings(),
    );

    let err = handler
        .handle(RegisterForEventCommand {
            event_id,
            caller: email("bob@users.example"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EventFull);
}

#[tokio::test]
async fn club_session_cannot_settle_an_event_registration() {
    let club = approved_club(2500);
    let club_id = club.id;
    let clubs = Arc::new(InMemoryClubs::with_club(club));
    let memberships = Arc::new(InMemoryMemberships::default());
    let provider = Arc::new(RecordingProvider::default());
    let ledger = Arc::new(InMemoryLedger::default());

    let join = JoinClubHandler::new(clubs, memberships, provider.clone(), settings());
    let session_id = match join
        .handle(JoinClubCommand { club_id, caller: email("alice@users.example") })
        .await
        .unwrap()
    {
        JoinOutcome::CheckoutRequired { session_id, .. } => session_id,
        JoinOutcome::Joined(_) => panic!("paid club joined without checkout"),
    };

    let confirm = ConfirmEventCheckoutHandler::new(provider, ledger.clone());
    let err = confirm
        .handle(ConfirmEventCheckoutCommand {
            session_id,
            caller: email("alice@users.example"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::CheckoutKindMismatch);
    assert_eq!(ledger.registration_count(), 0);
}

#[tokio::test]
async fn paid_event_registration_settles_through_the_provider() {
    let club = approved_club(0);
    let club_id = club.id;
    let event = upcoming_event(
        club_id,
        EventPricing::from_parts(true, Some(Money::from_cents(1000).unwrap())).unwrap(),
        None,
    );
    let event_id = event.id;

    let events = Arc::new(InMemoryEvents::with_event(event));
    let memberships = Arc::new(InMemoryMemberships::with_membership(Membership::activate_free(
        email("alice@users.example"),
        club_id,
    )));
    let registrations = Arc::new(InMemoryRegistrations::default());
    let provider = Arc::new(RecordingProvider::default());
    let ledger = Arc::new(InMemoryLedger::default());

    let register = RegisterForEventHandler::new(
        events,
        memberships,
        registrations.clone(),
        provider.clone(),
        settings(),
    );

    let session_id = match register
        .handle(RegisterForEventCommand {
            event_id,
            caller: email("alice@users.example"),
        })
        .await
        .unwrap()
    {
        RegistrationOutcome::CheckoutRequired { session_id, .. } => session_id,
        RegistrationOutcome::Registered(_) => panic!("paid event registered without checkout"),
    };

    assert!(registrations.stored().is_empty());

    let confirm = ConfirmEventCheckoutHandler::new(provider, ledger.clone());
    let confirmation = confirm
        .handle(ConfirmEventCheckoutCommand {
            session_id,
            caller: email("alice@users.example"),
        })
        .await
        .unwrap();

    assert_eq!(confirmation.outcome, CommitOutcome::Committed);
    assert_eq!(confirmation.event_id, event_id);
    assert_eq!(ledger.payment_count(), 1);
    assert_eq!(ledger.registration_count(), 1);
}
