use crate::api::{Advisory, ApiClient, ApiError};
use std::rc::Rc;

/// Result of one listing fetch. A failed fetch is an empty list plus the
/// error, so the view can still render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingLoad {
    pub advisories: Vec<Advisory>,
    pub error: Option<ApiError>,
}

#[derive(Clone)]
pub struct AdvisoriesRepository {
    client: Rc<ApiClient>,
}

impl AdvisoriesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<Advisory>, ApiError> {
        self.client.list_advisories().await
    }

    pub async fn load(&self) -> ListingLoad {
        match self.list().await {
            Ok(advisories) => ListingLoad {
                advisories,
                error: None,
            },
            Err(err) => {
                log::error!("Error fetching advisories: {}", err);
                ListingLoad {
                    advisories: Vec::new(),
                    error: Some(err),
                }
            }
        }
    }
}
