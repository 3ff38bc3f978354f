//! Internship listings and applications.

use unilink_core::Result;
use unilink_core::types::{
    ApplicationReceipt, Internship, InternshipApplication, InternshipFilter, NewInternship,
};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_INTERNSHIP;

/// Wraps the `/internships` resource family.
#[derive(Debug, Clone)]
pub struct InternshipService {
    client: ApiClient,
}

impl InternshipService {
    /// Creates a new internship service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists internships matching the filter.
    pub async fn list(&self, filter: &InternshipFilter) -> Result<Vec<Internship>> {
        self.client.get_with_query("/internships", filter).await
    }

    /// Fetches a single internship.
    pub async fn get(&self, id: &str) -> Result<Internship> {
        self.client.get(&format!("/internships/{id}")).await
    }

    /// Publishes a new internship.
    pub async fn create(&self, internship: &NewInternship) -> Result<Internship> {
        let created: Internship = self.client.post("/internships", internship).await?;
        tracing::info!(
            target: TRACING_TARGET_INTERNSHIP,
            internship_id = %created.id,
            "Internship created"
        );
        Ok(created)
    }

    /// Applies to an internship.
    pub async fn apply(
        &self,
        id: &str,
        application: &InternshipApplication,
    ) -> Result<ApplicationReceipt> {
        let receipt: ApplicationReceipt = self
            .client
            .post(&format!("/internships/{id}/apply"), application)
            .await?;
        tracing::info!(
            target: TRACING_TARGET_INTERNSHIP,
            internship_id = %id,
            application_id = %receipt.id,
            "Application submitted"
        );
        Ok(receipt)
    }
}
