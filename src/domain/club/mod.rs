//! Club aggregate.
//!
//! Clubs are created by managers in `pending` status and only move to
//! `approved` or `rejected` through an admin action. Status and owner are
//! immutable through the manager update path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, Money, Timestamp, ValidationError,
};

/// Approval status of a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    /// Freshly created, awaiting admin review. Not joinable.
    Pending,
    /// Visible and joinable.
    Approved,
    /// Turned down by an admin.
    Rejected,
}

impl ClubStatus {
    /// Stable string form used in the database and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubStatus::Pending => "pending",
            ClubStatus::Approved => "approved",
            ClubStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ClubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClubStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ClubStatus::Pending),
            "approved" => Ok(ClubStatus::Approved),
            "rejected" => Ok(ClubStatus::Rejected),
            other => Err(format!("unknown club status: {}", other)),
        }
    }
}

/// Validated input for creating a club.
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub banner_image: String,
    pub membership_fee: Money,
    pub manager_email: EmailAddress,
}

/// Fields a managing owner may change after creation.
///
/// Status, owner, and timestamps are deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct ClubUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    pub membership_fee: Option<Money>,
}

/// A club in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub banner_image: String,
    pub membership_fee: Money,
    pub manager_email: EmailAddress,
    pub status: ClubStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn require_nonempty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

impl Club {
    /// Creates a club in `pending` status.
    ///
    /// All textual fields must be non-empty; the fee was already validated as
    /// non-negative when the `Money` was built.
    pub fn create(input: NewClub) -> Result<Self, ValidationError> {
        require_nonempty("name", &input.name)?;
        require_nonempty("description", &input.description)?;
        require_nonempty("category", &input.category)?;
        require_nonempty("location", &input.location)?;
        require_nonempty("banner_image", &input.banner_image)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ClubId::new(),
            name: input.name,
            description: input.description,
            category: input.category,
            location: input.location,
            banner_image: input.banner_image,
            membership_fee: input.membership_fee,
            manager_email: input.manager_email,
            status: ClubStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a manager update. Status and owner cannot change here.
    pub fn apply_update(&mut self, update: ClubUpdate) -> Result<(), ValidationError> {
        if let Some(name) = update.name {
            require_nonempty("name", &name)?;
            self.name = name;
        }
        if let Some(description) = update.description {
            require_nonempty("description", &description)?;
            self.description = description;
        }
        if let Some(category) = update.category {
            require_nonempty("category", &category)?;
            self.category = category;
        }
        if let Some(location) = update.location {
            require_nonempty("location", &location)?;
            self.location = location;
        }
        if let Some(banner_image) = update.banner_image {
            require_nonempty("banner_image", &banner_image)?;
            self.banner_image = banner_image;
        }
        if let Some(fee) = update.membership_fee {
            self.membership_fee = fee;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Admin moderation: pending clubs move to approved or rejected.
    pub fn moderate(&mut self, status: ClubStatus) -> Result<(), DomainError> {
        if status == ClubStatus::Pending {
            return Err(DomainError::validation(
                "status",
                "Clubs cannot be moved back to pending",
            ));
        }
        if self.status != ClubStatus::Pending {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Club is already {}", self.status),
            ));
        }
        self.status = status;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Whether the caller owns this club.
    pub fn is_owned_by(&self, email: &EmailAddress) -> bool {
        &self.manager_email == email
    }

    /// Whether joining this club costs nothing.
    pub fn is_free(&self) -> bool {
        self.membership_fee.is_zero()
    }
}
