//! JSON DTOs for club endpoints.
//!
//! Fees cross this boundary in major units; the domain carries cents.

use serde::{Deserialize, Serialize};

use crate::application::handlers::club::ClubDetail;
use crate::domain::club::{Club, ClubStatus, ClubUpdate, NewClub};
use crate::domain::foundation::{DomainError, EmailAddress, Money};
use crate::ports::{ClubFilter, ClubSort, RosterRow};

/// Request to create a club. The owner is the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub banner_image: String,
    pub membership_fee: f64,
}

impl CreateClubRequest {
    pub fn into_new_club(self, manager_email: EmailAddress) -> Result<NewClub, DomainError> {
        Ok(NewClub {
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            banner_image: self.banner_image,
            membership_fee: Money::from_major(self.membership_fee)?,
            manager_email,
        })
    }
}

/// Request to update club fields. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClubRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    pub membership_fee: Option<f64>,
}

impl UpdateClubRequest {
    pub fn into_update(self) -> Result<ClubUpdate, DomainError> {
        Ok(ClubUpdate {
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            banner_image: self.banner_image,
            membership_fee: self.membership_fee.map(Money::from_major).transpose()?,
        })
    }
}

/// Admin moderation request: approve or reject a pending club.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerateClubRequest {
    pub status: ClubStatus,
}

/// Catalog listing query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListClubsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListClubsQuery {
    pub fn into_filter_and_sort(self) -> Result<(ClubFilter, ClubSort), DomainError> {
        let status = self
            .status
            .map(|s| {
                s.parse::<ClubStatus>()
                    .map_err(|e| DomainError::validation("status", e))
            })
            .transpose()?;

        let sort = match self.sort.as_deref() {
            None | Some("recency") => ClubSort::Recency,
            Some("fee") => ClubSort::Fee,
            Some(other) => {
                return Err(DomainError::validation(
                    "sort",
                    format!("unknown sort order: {}", other),
                ))
            }
        };

        Ok((ClubFilter { status, search: self.search, manager_email: None }, sort))
    }
}

/// A club as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub banner_image: String,
    pub membership_fee: f64,
    pub manager_email: String,
    pub status: ClubStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id.to_string(),
            name: club.name,
            description: club.description,
            category: club.category,
            location: club.location,
            banner_image: club.banner_image,
            membership_fee: club.membership_fee.as_major(),
            manager_email: club.manager_email.to_string(),
            status: club.status,
            created_at: club.created_at.to_rfc3339(),
            updated_at: club.updated_at.to_rfc3339(),
        }
    }
}

/// Club detail: the club plus its count of upcoming events.
#[derive(Debug, Clone, Serialize)]
pub struct ClubDetailResponse {
    #[serde(flatten)]
    pub club: ClubResponse,
    pub upcoming_events: i64,
}

impl From<ClubDetail> for ClubDetailResponse {
    fn from(detail: ClubDetail) -> Self {
        Self {
            club: ClubResponse::from(detail.club),
            upcoming_events: detail.upcoming_events,
        }
    }
}

/// One member on the roster view.
#[derive(Debug, Clone, Serialize)]
pub struct RosterRowResponse {
    pub membership_id: String,
    pub user_email: String,
    pub user_role: String,
    pub membership_status: String,
    pub joined_at: String,
}

impl From<RosterRow> for RosterRowResponse {
    fn from(row: RosterRow) -> Self {
        Self {
            membership_id: row.membership_id.to_string(),
            user_email: row.user_email.to_string(),
            user_role: row.user_role,
            membership_status: row.membership_status.as_str().to_string(),
            joined_at: row.joined_at.to_rfc3339(),
        }
    }
}
