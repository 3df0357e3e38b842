//! Club repository port.

use async_trait::async_trait;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress};

/// Catalog listing filter.
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    /// Restrict to a single approval status.
    pub status: Option<ClubStatus>,
    /// Case-insensitive free-text match on name, category, or location.
    pub search: Option<String>,
    /// Restrict to clubs owned by this manager.
    pub manager_email: Option<EmailAddress>,
}

/// Catalog sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClubSort {
    /// Newest first.
    #[default]
    Recency,
    /// Cheapest first.
    Fee,
}

/// Port for club persistence.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn insert(&self, club: &Club) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    async fn list(&self, filter: &ClubFilter, sort: ClubSort) -> Result<Vec<Club>, DomainError>;

    /// Persists the current state of an existing club.
    ///
    /// Fails with `ClubNotFound` when no row was updated.
    async fn update(&self, club: &Club) -> Result<(), DomainError>;

    /// Deletes a club; dependent events, memberships, and registrations go
    /// with it (cascade).
    async fn delete(&self, id: &ClubId) -> Result<(), DomainError>;
}
