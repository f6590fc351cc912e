use crate::error::{Error, Result};
use crate::digikey_models::SearchResults;
use crate::search::KeywordRequest;
use crate::session::{Credentials, Session};
use log::{debug, warn};
use serde::Deserialize;

const TOKEN_ENDPOINT: &str = "https://api.digikey.com/v1/oauth2/token";
const SEARCH_ENDPOINT: &str = "https://api.digikey.com/products/v4/search/keyword";
const USER_AGENT: &str = "digikey2kicad_rs/0.1.0";

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct DigikeyApi {
    client: reqwest::Client,
}

impl DigikeyApi {
    pub fn new() -> Self {
        DigikeyApi {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
        }
    }

    /// Requests a fresh bearer token via the client-credentials grant.
    pub(crate) async fn request_token(&self, credentials: &Credentials) -> Result<String> {
        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let res = self.client.post(TOKEN_ENDPOINT).form(&form).send().await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            warn!("token request rejected: {status} {body}");
            return Err(Error::AuthError(format!(
                "token request failed with status {status}"
            )));
        }
        let token = res.json::<TokenResponse>().await?;
        Ok(token.access_token)
    }

    /// Runs one keyword search. An expired bearer (HTTP 401) is refreshed
    /// through the session and the request is retried exactly once; any
    /// other failure surfaces as an error, which callers can tell apart
    /// from a successful search with zero matches.
    pub async fn keyword_search(
        &self,
        session: &mut Session,
        request: &KeywordRequest,
    ) -> Result<SearchResults> {
        let token = session.bearer(self).await?;
        let mut res = self.post_search(session, &token, request).await?;

        if res.status() == reqwest::StatusCode::UNAUTHORIZED {
            debug!("search returned 401, refreshing token and retrying once");
            let token = session.refresh(self).await?;
            res = self.post_search(session, &token, request).await?;
        }

        let res = res.error_for_status()?;
        Ok(res.json::<SearchResults>().await?)
    }

    async fn post_search(
        &self,
        session: &Session,
        token: &str,
        request: &KeywordRequest,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(SEARCH_ENDPOINT)
            .header("x-digikey-client-id", &session.credentials.client_id)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?)
    }
}

impl Default for DigikeyApi {
    fn default() -> Self {
        Self::new()
    }
}
