// Profile lookup: one blocking GET against the GitHub users endpoint to find
// the avatar shown in the README's Questions section.

use crate::error::GenerateError;
use reqwest::blocking::Client;
use serde::Deserialize;

/// What the README needs to know about the user's GitHub profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub avatar_url: String,
}

/// Resolves a username to its profile. `GitHubClient` is the real one;
/// tests substitute their own.
pub trait ProfileLookup {
    fn fetch_profile(&self, username: &str) -> Result<ProfileInfo, GenerateError>;
}

/// Subset of the `GET /users/{username}` response we read.
#[derive(Deserialize, Debug)]
struct GitHubUser {
    avatar_url: String,
}

/// Blocking GitHub client. Sends exactly one request per lookup and relies
/// on reqwest's default timeout.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

fn user_agent() -> String {
    format!("readmegen/{}", env!("CARGO_PKG_VERSION"))
}

impl GitHubClient {
    /// Build a client for the API rooted at `base_url`
    /// (normally `https://api.github.com`).
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        // GitHub answers 403 to requests without a User-Agent.
        let client = Client::builder().user_agent(user_agent()).build()?;
        Ok(GitHubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }
}

impl ProfileLookup for GitHubClient {
    fn fetch_profile(&self, username: &str) -> Result<ProfileInfo, GenerateError> {
        let request_error = |source: reqwest::Error| GenerateError::ProfileRequest {
            username: username.to_string(),
            source,
        };

        let res = self
            .client
            .get(self.user_url(username))
            .send()
            .map_err(request_error)?;
        if !res.status().is_success() {
            return Err(GenerateError::ProfileStatus {
                username: username.to_string(),
                status: res.status(),
            });
        }
        let body = res.text().map_err(request_error)?;
        parse_profile(username, &body)
    }
}

/// Pull the avatar URL out of a users-endpoint JSON body.
pub fn parse_profile(username: &str, body: &str) -> Result<ProfileInfo, GenerateError> {
    let user: GitHubUser =
        serde_json::from_str(body).map_err(|e| GenerateError::ProfilePayload {
            username: username.to_string(),
            details: e.to_string(),
        })?;
    Ok(ProfileInfo {
        avatar_url: user.avatar_url,
    })
}
