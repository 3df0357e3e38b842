//! Ports: async-trait interfaces between the application core and adapters.

mod checkout_provider;
mod club_repository;
mod event_repository;
mod ledger_reader;
mod membership_repository;
mod payment_ledger;
mod reporting_reader;
mod session_validator;
mod user_repository;

pub use checkout_provider::{
    CheckoutError, CheckoutKind, CheckoutMetadata, CheckoutProvider, CheckoutSession,
    CreateCheckoutSession, RetrievedCheckout, SessionPaymentStatus,
};
pub use club_repository::{ClubFilter, ClubRepository, ClubSort};
pub use event_repository::EventRepository;
pub use ledger_reader::{LedgerReader, MyClubRow, MyEventRow, RosterRow};
pub use membership_repository::{MembershipRepository, RegistrationRepository};
pub use payment_ledger::{CommitOutcome, PaymentLedger};
pub use reporting_reader::{
    ClubMemberCount, ManagedClubRow, ManagerOverview, MemberStats, MonthlyRevenue, PlatformStats,
    ReportingReader,
};
pub use session_validator::SessionValidator;
pub use user_repository::{UpsertOutcome, UserRepository};
