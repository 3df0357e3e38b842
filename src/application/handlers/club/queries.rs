//! Club catalog read queries.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{ClubId, DomainError, ErrorCode};
use crate::ports::{ClubFilter, ClubRepository, ClubSort, EventRepository};

/// A club together with its count of upcoming events, as shown on the
/// catalog detail page.
#[derive(Debug, Clone)]
pub struct ClubDetail {
    pub club: Club,
    pub upcoming_events: i64,
}

/// Read-side queries over the club catalog.
pub struct ClubQueries {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
}

impl ClubQueries {
    pub fn new(clubs: Arc<dyn ClubRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { clubs, events }
    }

    pub async fn get(&self, id: &ClubId) -> Result<ClubDetail, DomainError> {
        let club = self
            .clubs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;
        let upcoming_events = self.events.count_upcoming(id).await?;
        Ok(ClubDetail { club, upcoming_events })
    }

    pub async fn list(&self, filter: &ClubFilter, sort: ClubSort) -> Result<Vec<Club>, DomainError> {
        self.clubs.list(filter, sort).await
    }
}
