//! Mentor discovery and mentorship requests.

use crate::API_SERVER_BASE_URL;
use crate::error::mentorship::MentorshipError;
use crate::session::TokenStore;

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const FIND_MENTORS_ENDPOINT: &str = "api/mentorship/requests/find_mentors/";
const MENTOR_REQUESTS_ENDPOINT: &str = "api/mentorship/requests/";

/// The mentor's account, as embedded in a recommendation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MentorUser {
    pub username: String,
}

/// Mentor profile fields shown on a recommendation card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MentorProfile {
    pub id: u64,
    pub user: MentorUser,
    pub year: u32,
    pub branch: String,
}

/// One scored mentor recommendation. Fetched as an ordered sequence,
/// rendered immediately, not retained.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Recommendation {
    pub mentor: MentorProfile,
    pub compatibility_score: f64,
}

#[derive(Deserialize)]
struct RecommendationsResponse {
    recommendations: Vec<Recommendation>,
}

#[derive(Clone)]
pub struct MentorClient {
    base_url: Url,
    client: Client,
}

impl MentorClient {
    pub fn new(base_url_str: &str) -> Result<Self, MentorshipError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Client against the fixed local API server.
    pub fn local() -> Result<Self, MentorshipError> {
        Self::new(API_SERVER_BASE_URL)
    }

    /// Bearer value from the stored session, or `NotAuthenticated`.
    fn authorization(&self, store: &dyn TokenStore) -> Result<String, MentorshipError> {
        let tokens = store.load()?.ok_or_else(|| {
            MentorshipError::not_authenticated("no stored session - log in first")
        })?;

        Ok(tokens.access.bearer())
    }

    /// Fetch the ordered mentor recommendation list for the logged-in user.
    pub async fn find_mentors(
        &self,
        store: &dyn TokenStore,
    ) -> Result<Vec<Recommendation>, MentorshipError> {
        let authorization = self.authorization(store)?;
        let url = self.base_url.join(FIND_MENTORS_ENDPOINT)?;

        debug!("Fetching mentor recommendations");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MentorshipError::server(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let parsed: RecommendationsResponse = response.json().await?;

        info!("Received {} mentor recommendations", parsed.recommendations.len());
        Ok(parsed.recommendations)
    }

    /// Submit a mentorship request to one mentor.
    ///
    /// The browser original referenced this as an undefined `sendRequest`
    /// collaborator; defined here against the requests endpoint.
    pub async fn send_request(
        &self,
        store: &dyn TokenStore,
        mentor_id: u64,
    ) -> Result<(), MentorshipError> {
        let authorization = self.authorization(store)?;
        let url = self.base_url.join(MENTOR_REQUESTS_ENDPOINT)?;

        let body = serde_json::json!({ "mentor_id": mentor_id });

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MentorshipError::server(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        info!("Mentorship request sent to mentor {mentor_id}");
        Ok(())
    }
}
