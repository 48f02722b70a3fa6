use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{Advisory, ApiError, NewAdvisory, Profile},
};

const PROFILES: &str = "profiles";
const ADVISORIES: &str = "advisories";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

impl ApiClient {
    fn collection_url(base: &str, collection: &str) -> String {
        format!("{}/rest/v1/{}", base, collection)
    }

    /// Role of the profile owned by `identity_id`. Zero or several matches
    /// are an error.
    pub async fn fetch_profile(&self, identity_id: &str) -> Result<Profile, ApiError> {
        let endpoint = self.resolved_endpoint().await;
        let url = format!(
            "{}?select=role&id=eq.{}",
            Self::collection_url(&endpoint.url, PROFILES),
            utf8_percent_encode(identity_id, NON_ALPHANUMERIC)
        );
        let response = self
            .send(
                self.http_client()
                    .get(url)
                    .headers(self.auth_headers(&endpoint).await?)
                    .header(reqwest::header::ACCEPT, SINGLE_OBJECT),
            )
            .await?;
        Self::parse_json(response).await
    }

    /// All advisories, newest publication date first.
    pub async fn list_advisories(&self) -> Result<Vec<Advisory>, ApiError> {
        let endpoint = self.resolved_endpoint().await;
        let url = format!(
            "{}?select=*&order=date.desc",
            Self::collection_url(&endpoint.url, ADVISORIES)
        );
        let response = self
            .send(
                self.http_client()
                    .get(url)
                    .headers(self.auth_headers(&endpoint).await?),
            )
            .await?;
        Self::parse_json(response).await
    }

    pub async fn insert_advisory(&self, advisory: &NewAdvisory) -> Result<(), ApiError> {
        let endpoint = self.resolved_endpoint().await;
        self.send(
            self.http_client()
                .post(Self::collection_url(&endpoint.url, ADVISORIES))
                .headers(self.auth_headers(&endpoint).await?)
                .header("Prefer", "return=minimal")
                .json(&[advisory]),
        )
        .await
        .map(|_| ())
    }
}
