// --- File: crates/offersign_docusign/src/auth.rs ---
//! JWT-bearer service-account authentication against the DocuSign OAuth
//! endpoints. Every request performs its own exchange; tokens are never
//! cached across requests.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::info;

use offersign_common::HTTP_CLIENT;

use crate::error::{extract_error_message, DocusignError};

/// Fixed scope requested for every exchange.
pub const TOKEN_SCOPE: &str = "signature";
/// Fixed assertion lifetime in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize)]
struct AssertionClaims {
    iss: String,
    sub: String,
    aud: String,
    iat: i64,
    exp: i64,
    scope: String,
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    accounts: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    account_id: String,
    base_uri: String,
}

/// Short-lived credentials for one request. Dropped when the request ends.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub access_token: String,
    pub account_id: String,
    /// Account-scoped REST root, e.g. `https://demo.docusign.net/restapi`.
    pub base_path: String,
}

/// Builds the signed RS256 assertion for the token exchange.
///
/// `aud` must be the bare OAuth host (no scheme); the provider rejects
/// assertions whose audience carries one.
pub fn build_assertion(
    client_id: &str,
    user_guid: &str,
    aud: &str,
    private_key_pem: &str,
) -> Result<String, DocusignError> {
    let iat = Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: client_id.to_string(),
        sub: user_guid.to_string(),
        aud: aud.to_string(),
        iat,
        exp: iat + TOKEN_LIFETIME_SECS,
        scope: TOKEN_SCOPE.to_string(),
    };

    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| DocusignError::AuthError(format!("invalid signing key: {e}")))?;
    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| DocusignError::AuthError(format!("failed to sign token assertion: {e}")))
}

/// Trades the signed assertion for a short-lived access token.
pub async fn request_user_token(
    oauth_base_url: &str,
    client_id: &str,
    user_guid: &str,
    private_key_pem: &str,
) -> Result<String, DocusignError> {
    let aud = oauth_base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let assertion = build_assertion(client_id, user_guid, aud, private_key_pem)?;

    let response = HTTP_CLIENT
        .post(format!("{oauth_base_url}/oauth/token"))
        .form(&[
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        return Err(DocusignError::AuthError(extract_error_message(&body_text)));
    }

    let token: TokenExchangeResponse = serde_json::from_str(&body_text)?;
    Ok(token.access_token)
}

/// Resolves the caller's account and API base path. The first listed account
/// is used.
pub async fn fetch_user_info(
    oauth_base_url: &str,
    access_token: &str,
) -> Result<(String, String), DocusignError> {
    let response = HTTP_CLIENT
        .get(format!("{oauth_base_url}/oauth/userinfo"))
        .bearer_auth(access_token)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        return Err(DocusignError::AuthError(extract_error_message(&body_text)));
    }

    let user_info: UserInfoResponse = serde_json::from_str(&body_text)?;
    let account = user_info
        .accounts
        .into_iter()
        .next()
        .ok_or_else(|| DocusignError::AuthError("user info contained no accounts".to_string()))?;

    Ok((account.account_id, account.base_uri))
}

/// Runs the full exchange: assertion → access token → account lookup.
pub async fn acquire_grant(
    oauth_base_url: &str,
    client_id: &str,
    user_guid: &str,
    private_key_pem: &str,
) -> Result<AccessGrant, DocusignError> {
    let access_token =
        request_user_token(oauth_base_url, client_id, user_guid, private_key_pem).await?;
    let (account_id, base_uri) = fetch_user_info(oauth_base_url, &access_token).await?;

    info!("Authenticated against DocuSign account {account_id}");

    Ok(AccessGrant {
        access_token,
        base_path: format!("{base_uri}/restapi"),
        account_id,
    })
}
