//! Minecraft profile lookup over HTTP.
//!
//! `GET <endpoint>/<name>` answers with a profile object when the name is
//! registered and with an error object otherwise, so the body is decoded
//! regardless of the status code. A `name` field means taken.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{ExistenceCheck, LookupError};

pub const DEFAULT_ENDPOINT: &str = "https://api.mojang.com/users/profiles/minecraft";
pub const DEFAULT_USER_AGENT: &str = concat!("randomnickgen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ProfileDto {
    name: Option<String>,
}

/// Reqwest-backed [`ExistenceCheck`] against the profile endpoint.
pub struct MojangProfiles {
    client: Client,
    endpoint: Url,
}

impl MojangProfiles {
    /// Both the connect phase and the whole request are bounded by `timeout`.
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: base_url(endpoint)?,
        })
    }

    fn profile_url(&self, name: &str) -> Result<Url, LookupError> {
        self.endpoint
            .join(name)
            .map_err(|_| LookupError::InvalidName(name.to_string()))
    }
}

/// `Url::join` replaces the last segment unless the base ends with `/`.
fn base_url(endpoint: &str) -> anyhow::Result<Url> {
    let normalized = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };
    Url::parse(&normalized).with_context(|| format!("Invalid lookup endpoint {:?}", endpoint))
}

fn parse_profile(body: &[u8]) -> Result<bool, LookupError> {
    let profile: ProfileDto = serde_json::from_slice(body)?;
    Ok(profile.name.is_some())
}

#[async_trait]
impl ExistenceCheck for MojangProfiles {
    async fn exists(&self, name: &str) -> Result<bool, LookupError> {
        let url = self.profile_url(name)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(
            "Profile lookup for {} answered {}: {}",
            name,
            status.as_u16(),
            String::from_utf8_lossy(&body)
        );
        parse_profile(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::registered(br#"{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch"}"#, true)]
    #[case::unknown(br#"{"path":"/users/profiles/minecraft/x","errorMessage":"Couldn't find any profile with name x"}"#, false)]
    #[case::empty_object(b"{}", false)]
    fn test_parse_profile(#[case] body: &[u8], #[case] expected: bool) {
        assert_eq!(parse_profile(body).unwrap(), expected);
    }

    #[test]
    fn test_parse_profile_rejects_non_json() {
        let err = parse_profile(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn test_profile_url_appends_name() {
        let profiles =
            MojangProfiles::new(DEFAULT_ENDPOINT, Duration::from_secs(5), DEFAULT_USER_AGENT)
                .unwrap();
        assert_eq!(
            profiles.profile_url("Dog_42").unwrap().as_str(),
            "https://api.mojang.com/users/profiles/minecraft/Dog_42"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let url = base_url("http://localhost:8080/profiles/").unwrap();
        assert_eq!(url.join("abc").unwrap().as_str(), "http://localhost:8080/profiles/abc");
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(base_url("not a url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let profiles =
            MojangProfiles::new("http://127.0.0.1:9/profiles", Duration::from_millis(500), "test")
                .unwrap();
        let err = profiles.exists("dog").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
