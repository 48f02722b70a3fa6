use super::utils::AdvisoryDraft;
use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct CreateAdvisoryRepository {
    client: Rc<ApiClient>,
}

impl CreateAdvisoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Reads the current identity, then inserts exactly one record created by it.
    pub async fn create(&self, draft: AdvisoryDraft) -> Result<(), ApiError> {
        let identity = self
            .client
            .get_user()
            .await?
            .ok_or_else(|| ApiError::unauthorized("You must be signed in to create advisories"))?;
        let record = draft.into_record(identity.id);
        self.client.insert_advisory(&record).await?;
        log::info!("Created advisory {}", record.id);
        Ok(())
    }
}
