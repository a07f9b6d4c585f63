//! Cortex XDR public API client (advanced API key authentication)
//!
//! Every request carries a fresh nonce and timestamp. The `Authorization`
//! header is the hex SHA-256 of `api_key + nonce + timestamp`, so the key
//! itself never goes over the wire.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::api::XdrApi;
use super::models::XdrEndpoint;
use super::response::{check_status, parse_json};
use crate::config::XdrConfig;
use crate::error::{ApiError, Error, Result};

const NONCE_LEN: usize = 64;
const NONCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
/// Largest multiple of the alphabet size that fits in a byte; bytes at or
/// above it are redrawn so every character is equally likely.
const NONCE_ACCEPT_BELOW: u8 = (256 / NONCE_ALPHABET.len() * NONCE_ALPHABET.len()) as u8;

/// Cortex XDR API client
pub struct XdrClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    api_key_id: String,
}

/// Headers for one advanced-auth request, in send order.
pub fn auth_headers(
    api_key: &str,
    api_key_id: &str,
    nonce: &str,
    timestamp_ms: i64,
) -> Vec<(&'static str, String)> {
    let timestamp = timestamp_ms.to_string();

    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(nonce.as_bytes());
    hasher.update(timestamp.as_bytes());
    let signature = format!("{:x}", hasher.finalize());

    vec![
        ("x-xdr-timestamp", timestamp),
        ("x-xdr-nonce", nonce.to_string()),
        ("x-xdr-auth-id", api_key_id.to_string()),
        ("Authorization", signature),
    ]
}

/// Draw a 64-character alphanumeric nonce from `rng`.
pub fn nonce_from_rng(rng: &mut impl RngCore) -> String {
    let mut nonce = String::with_capacity(NONCE_LEN);
    let mut buf = [0u8; NONCE_LEN];
    while nonce.len() < NONCE_LEN {
        rng.fill_bytes(&mut buf);
        for byte in buf {
            if nonce.len() == NONCE_LEN {
                break;
            }
            if byte < NONCE_ACCEPT_BELOW {
                nonce.push(NONCE_ALPHABET[byte as usize % NONCE_ALPHABET.len()] as char);
            }
        }
    }
    nonce
}

/// A fresh nonce from a ChaCha20 generator seeded by the OS.
pub fn generate_nonce() -> Result<String> {
    let mut rng = ChaCha20Rng::try_from_os_rng()
        .map_err(|e| Error::Other(format!("OS random source unavailable: {}", e)))?;
    Ok(nonce_from_rng(&mut rng))
}

impl XdrClient {
    /// Create a client from configuration.
    ///
    /// Fails with a configuration error when credentials are missing.
    pub fn new(config: &XdrConfig) -> Result<Self> {
        let creds = config.credentials()?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: creds.base_url.trim_end_matches('/').to_string(),
            api_key: creds.api_key.to_string(),
            api_key_id: creds.api_key_id.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/public_api/v1/{}", self.base_url, path)
    }

    /// POST a request body to a public API path and return the `reply`.
    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        #[derive(Deserialize)]
        struct Envelope<T> {
            reply: T,
        }

        let url = self.url(path);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(&body);
        for (name, value) in auth_headers(
            &self.api_key,
            &self.api_key_id,
            &generate_nonce()?,
            Utc::now().timestamp_millis(),
        ) {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let envelope: Envelope<T> = parse_json(check_status(response).await?).await?;
        Ok(envelope.reply)
    }
}

#[async_trait]
impl XdrApi for XdrClient {
    async fn get_endpoints(&self) -> Result<Vec<XdrEndpoint>> {
        self.post("endpoints/get_endpoints/", serde_json::json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn config(base_url: &str) -> XdrConfig {
        XdrConfig {
            base_url: Some(base_url.to_string()),
            api_key: Some("key".to_string()),
            api_key_id: Some("42".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_headers_sign_key_nonce_and_timestamp() {
        let headers = auth_headers("key", "42", "nonce", 1700000000000);

        let mut hasher = Sha256::new();
        hasher.update(b"keynonce1700000000000");
        let expected = format!("{:x}", hasher.finalize());

        assert_eq!(
            headers,
            vec![
                ("x-xdr-timestamp", "1700000000000".to_string()),
                ("x-xdr-nonce", "nonce".to_string()),
                ("x-xdr-auth-id", "42".to_string()),
                ("Authorization", expected),
            ]
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let headers = auth_headers("k", "1", "n", 1);
        let (_, signature) = &headers[3];
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_nonce_shape_and_freshness() {
        let a = generate_nonce().unwrap();
        let b = generate_nonce().unwrap();
        assert_eq!(a.len(), NONCE_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_nonce_follows_the_generator() {
        let a = nonce_from_rng(&mut ChaCha20Rng::from_seed([7; 32]));
        let b = nonce_from_rng(&mut ChaCha20Rng::from_seed([7; 32]));
        let c = nonce_from_rng(&mut ChaCha20Rng::from_seed([8; 32]));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), NONCE_LEN);
    }

    #[test]
    fn test_nonce_uses_the_whole_alphabet() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.extend(nonce_from_rng(&mut rng).chars());
        }
        assert_eq!(seen.len(), NONCE_ALPHABET.len());
    }

    #[test]
    fn test_client_requires_credentials() {
        assert!(matches!(
            XdrClient::new(&XdrConfig::default()),
            Err(Error::Config(ConfigError::MissingXdrCredentials))
        ));
    }

    #[test]
    fn test_url_layout() {
        let client = XdrClient::new(&config("https://api-acme.xdr.us.paloaltonetworks.com/")).unwrap();
        assert_eq!(
            client.url("endpoints/get_endpoints/"),
            "https://api-acme.xdr.us.paloaltonetworks.com/public_api/v1/endpoints/get_endpoints/"
        );
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_get_endpoints_unwraps_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/public_api/v1/endpoints/get_endpoints/")
            .match_header("x-xdr-auth-id", "42")
            .match_header("x-xdr-nonce", mockito::Matcher::Regex("^[A-Za-z0-9]{64}$".into()))
            .match_header("authorization", mockito::Matcher::Regex("^[0-9a-f]{64}$".into()))
            .match_body(mockito::Matcher::Json(serde_json::json!({})))
            .with_status(200)
            .with_body(
                r#"{"reply": [
                    {"agent_id": "a1", "host_name": "WS-01", "agent_status": "CONNECTED", "ip": ["10.0.0.1"]},
                    {"agent_id": "a2", "host_name": "WS-02", "agent_status": "LOST", "ip": []}
                ]}"#,
            )
            .create_async()
            .await;

        let client = XdrClient::new(&config(&server.url())).unwrap();
        let endpoints = client.get_endpoints().await.unwrap();

        mock.assert_async().await;
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[1].host_name.as_deref(), Some("WS-02"));
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_get_endpoints_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/public_api/v1/endpoints/get_endpoints/")
            .with_status(401)
            .with_body(r#"{"reply": {"err_code": 401, "err_msg": "Public API request unauthorized"}}"#)
            .create_async()
            .await;

        let client = XdrClient::new(&config(&server.url())).unwrap();
        assert!(matches!(
            client.get_endpoints().await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
    }
}
