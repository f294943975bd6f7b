use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::app_error::{AppError, AppResult};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

const ASSERTION_TTL_SECS: i64 = 3600;
/// Refresh this long before the cached token actually expires.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Serialize)]
struct GrantClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    access_token: String,
    expires_at: i64,
}

/// Service-account authenticator for the Sheets API.
///
/// Signs an RS256 JWT grant with the account's private key and exchanges it
/// at the Google token endpoint. Tokens are cached until shortly before
/// expiry so a single submission does not pay for three grants.
pub struct GoogleAuthenticator {
    client: reqwest::Client,
    client_email: String,
    signing_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl GoogleAuthenticator {
    pub fn new(
        client: reqwest::Client,
        client_email: String,
        private_key: &SecretString,
    ) -> AppResult<Self> {
        let signing_key = EncodingKey::from_rsa_pem(private_key.expose_secret().as_bytes())
            .map_err(|e| AppError::Internal(format!("Invalid service account key: {}", e)))?;
        Ok(Self {
            client,
            client_email,
            signing_key,
            cached: Mutex::new(None),
        })
    }

    /// Bearer token for the Sheets API, reusing the cached one while fresh.
    pub async fn access_token(&self) -> AppResult<String> {
        let mut cached = self.cached.lock().await;
        let now = OffsetDateTime::now_utc().unix_timestamp();

        if let Some(token) = cached.as_ref() {
            if now < token.expires_at - EXPIRY_MARGIN_SECS {
                return Ok(token.access_token.clone());
            }
        }

        let assertion = self.signed_assertion(now)?;
        let token = self.exchange(&assertion).await?;
        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: now + token.expires_in,
        });
        Ok(access_token)
    }

    fn signed_assertion(&self, now: i64) -> AppResult<String> {
        let claims = GrantClaims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: TOKEN_URL,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    async fn exchange(&self, assertion: &str) -> AppResult<TokenResponse> {
        let params = [("grant_type", GRANT_TYPE), ("assertion", assertion)];
        let response = self
            .client
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Token endpoint returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}
