//! Reporting queries for the admin, manager, and member dashboards.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::ports::{ManagerOverview, MemberStats, PlatformStats, ReportingReader};

/// Read-side dashboard queries. Role gating happens at the HTTP layer; the
/// manager and member views are always scoped to the caller.
pub struct ReportingQueries {
    reader: Arc<dyn ReportingReader>,
}

impl ReportingQueries {
    pub fn new(reader: Arc<dyn ReportingReader>) -> Self {
        Self { reader }
    }

    pub async fn platform_stats(&self) -> Result<PlatformStats, DomainError> {
        self.reader.platform_stats().await
    }

    pub async fn manager_overview(
        &self,
        caller: &EmailAddress,
    ) -> Result<ManagerOverview, DomainError> {
        self.reader.manager_overview(caller).await
    }

    pub async fn member_stats(&self, caller: &EmailAddress) -> Result<MemberStats, DomainError> {
        self.reader.member_stats(caller).await
    }
}
