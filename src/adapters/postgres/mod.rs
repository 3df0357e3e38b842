//! PostgreSQL adapters for the persistence ports.

mod club_repository;
mod event_repository;
mod ledger_reader;
mod membership_repository;
mod payment_ledger;
mod registration_repository;
mod reporting_reader;
mod user_repository;

pub use club_repository::PostgresClubRepository;
pub use event_repository::PostgresEventRepository;
pub use ledger_reader::PostgresLedgerReader;
pub use membership_repository::PostgresMembershipRepository;
pub use payment_ledger::PostgresPaymentLedger;
pub use registration_repository::PostgresRegistrationRepository;
pub use reporting_reader::PostgresReportingReader;
pub use user_repository::PostgresUserRepository;
