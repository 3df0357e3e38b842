//! JoinClubHandler - a user joins an approved club.
//!
//! Free clubs activate the membership immediately; the duplicate-join guard
//! is the store's unique index, not a pre-read. Paid clubs open a checkout
//! session and hand back the redirect URL; nothing is written until the
//! session is confirmed.

use std::sync::Arc;

use crate::domain::club::ClubStatus;
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode};
use crate::domain::membership::Membership;
use crate::ports::{
    CheckoutKind, CheckoutMetadata, CheckoutProvider, ClubRepository, CreateCheckoutSession,
    MembershipRepository,
};

use crate::application::handlers::checkout::CheckoutSettings;

/// Command to join a club.
#[derive(Debug, Clone)]
pub struct JoinClubCommand {
    pub club_id: ClubId,
    pub caller: EmailAddress,
}

/// How a join request resolved.
#[derive(Debug, Clone)]
pub enum JoinOutcome {
    /// Free club: membership is active now.
    Joined(Membership),
    /// Paid club: the caller must complete checkout at this URL.
    CheckoutRequired { session_id: String, checkout_url: String },
}

/// Handler for club joins.
pub struct JoinClubHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
    provider: Arc<dyn CheckoutProvider>,
    settings: CheckoutSettings,
}

impl JoinClubHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        memberships: Arc<dyn MembershipRepository>,
        provider: Arc<dyn CheckoutProvider>,
        settings: CheckoutSettings,
    ) -> Self {
        Self { clubs, memberships, provider, settings }
    }

    pub async fn handle(&self, cmd: JoinClubCommand) -> Result<JoinOutcome, DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if club.status != ClubStatus::Approved {
            return Err(DomainError::new(
                ErrorCode::ClubNotApproved,
                "Club is not open for joining",
            ));
        }

        if club.is_free() {
            let membership = Membership::activate_free(cmd.caller, cmd.club_id);
            self.memberships.insert(&membership).await?;
            tracing::info!(club_id = %cmd.club_id, "free club joined");
            return Ok(JoinOutcome::Joined(membership));
        }

        // Courtesy check before the provider round-trip; the commit-time
        // unique index remains the real guard.
        if self.memberships.find_active(&cmd.caller, &cmd.club_id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::AlreadyMember,
                "Already an active member of this club",
            ));
        }

        let session = self
            .provider
            .create_session(CreateCheckoutSession {
                amount: club.membership_fee,
                currency: self.settings.currency.clone(),
                product_name: format!("{} membership", club.name),
                metadata: CheckoutMetadata {
                    user_email: cmd.caller,
                    kind: CheckoutKind::ClubJoin,
                    club_id: cmd.club_id,
                    event_id: None,
                },
                success_url: self.settings.club_success_url(&cmd.club_id),
                cancel_url: self.settings.club_cancel_url(&cmd.club_id),
            })
            .await?;

        tracing::info!(club_id = %cmd.club_id, session_id = %session.id, "club join checkout opened");
        Ok(JoinOutcome::CheckoutRequired { session_id: session.id, checkout_url: session.url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::checkout::test_support::{test_settings, MockCheckoutProvider};
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};
    use crate::application::handlers::membership::test_support::MockMembershipRepository;
    use crate::domain::foundation::Money;

    fn approved_club(manager: &str, fee: Money) -> crate::domain::club::Club {
        let mut club = pending_club(manager);
        club.membership_fee = fee;
        club.moderate(ClubStatus::Approved).unwrap();
        club
    }

    fn handler_with(
        club: crate::domain::club::Club,
        memberships: Arc<MockMembershipRepository>,
        provider: Arc<MockCheckoutProvider>,
    ) -> JoinClubHandler {
        JoinClubHandler::new(
            Arc::new(MockClubRepository::with_club(club)),
            memberships,
            provider,
            test_settings(),
        )
    }

    #[tokio::test]
    async fn free_club_join_activates_immediately() {
        let club = approved_club("m@x.com", Money::ZERO);
        let club_id = club.id;
        let memberships = Arc::new(MockMembershipRepository::new());
        let provider = Arc::new(MockCheckoutProvider::new());
        let handler = handler_with(club, memberships.clone(), provider.clone());

        let outcome = handler
            .handle(JoinClubCommand {
                club_id,
                caller: EmailAddress::parse("a@b.com").unwrap(),
            })
            .await
            .unwrap();

        match outcome {
            JoinOutcome::Joined(membership) => {
                assert!(membership.is_active());
                assert!(membership.checkout_ref.is_none());
            }
            other => panic!("expected immediate join, got {other:?}"),
        }
        assert_eq!(memberships.stored().len(), 1);
        // Free joins never reach the payment provider.
        assert!(provider.created().is_empty());
    }

    #[tokio::test]
    async fn paid_club_join_opens_checkout_without_writing() {
        let fee = Money::from_cents(1500).unwrap();
        let club = approved_club("m@x.com", fee);
        let club_id = club.id;
        let memberships = Arc::new(MockMembershipRepository::new());
        let provider = Arc::new(MockCheckoutProvider::new());
        let handler = handler_with(club, memberships.clone(), provider.clone());

        let outcome = handler
            .handle(JoinClubCommand {
                club_id,
                caller: EmailAddress::parse("a@b.com").unwrap(),
            })
            .await
            .unwrap();

        match outcome {
            JoinOutcome::CheckoutRequired { checkout_url, .. } => {
                assert!(checkout_url.starts_with("https://"));
            }
            other => panic!("expected checkout redirect, got {other:?}"),
        }
        assert!(memberships.stored().is_empty());

        let created = provider.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].amount, fee);
        assert_eq!(created[0].metadata.kind, CheckoutKind::ClubJoin);
        assert_eq!(created[0].metadata.club_id, club_id);
    }

    #[tokio::test]
    async fn pending_club_is_not_joinable() {
        let club = pending_club("m@x.com");
        let club_id = club.id;
        let handler = handler_with(
            club,
            Arc::new(MockMembershipRepository::new()),
            Arc::new(MockCheckoutProvider::new()),
        );

        let err = handler
            .handle(JoinClubCommand {
                club_id,
                caller: EmailAddress::parse("a@b.com").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ClubNotApproved);
    }

    #[tokio::test]
    async fn duplicate_free_join_surfaces_already_member() {
        let club = approved_club("m@x.com", Money::ZERO);
        let club_id = club.id;
        let memberships = Arc::new(MockMembershipRepository::new());
        let handler =
            handler_with(club, memberships.clone(), Arc::new(MockCheckoutProvider::new()));
        let cmd = JoinClubCommand {
            club_id,
            caller: EmailAddress::parse("a@b.com").unwrap(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AlreadyMember);
        assert_eq!(memberships.stored().len(), 1);
    }

    #[tokio::test]
    async fn existing_member_cannot_open_paid_checkout() {
        let club = approved_club("m@x.com", Money::from_cents(1500).unwrap());
        let club_id = club.id;
        let caller = EmailAddress::parse("a@b.com").unwrap();
        let memberships = Arc::new(MockMembershipRepository::new());
        memberships
            .insert(&Membership::activate_free(caller.clone(), club_id))
            .await
            .unwrap();
        let provider = Arc::new(MockCheckoutProvider::new());
        let handler = handler_with(club, memberships, provider.clone());

        let err = handler
            .handle(JoinClubCommand { club_id, caller })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AlreadyMember);
        assert!(provider.created().is_empty());
    }
}
