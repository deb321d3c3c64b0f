// --- File: crates/offersign_docusign/src/logic.rs ---
use serde::{Deserialize, Serialize};
use tracing::info;

use offersign_common::HTTP_CLIENT;
use offersign_config::DocusignConfig;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::auth::{acquire_grant, AccessGrant};
use crate::error::{extract_error_message, DocusignError};

/// Template role every signer is bound to.
pub const SIGNER_ROLE_NAME: &str = "Candidate";

// --- Data Structures ---

/// Request from the hiring agent to send an offer for signature.
/// Field names match the wire format the agent has always sent.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SendOfferRequest {
    #[serde(rename = "signerName")]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub signer_name: Option<String>,
    #[serde(rename = "signerEmail")]
    #[cfg_attr(feature = "openapi", schema(example = "jane.doe@example.com"))]
    pub signer_email: Option<String>,
    #[serde(rename = "CandidateRole")]
    #[cfg_attr(feature = "openapi", schema(example = "Backend Engineer"))]
    pub candidate_role: Option<String>,
    #[serde(rename = "StartDate")]
    #[cfg_attr(feature = "openapi", schema(example = "2025-09-01"))]
    pub start_date: Option<String>,
    #[serde(rename = "EndDate")]
    #[cfg_attr(feature = "openapi", schema(example = "2026-02-28"))]
    pub end_date: Option<String>,
    #[serde(rename = "PositionOfGuide")]
    #[cfg_attr(feature = "openapi", schema(example = "Engineering Lead"))]
    pub position_of_guide: Option<String>,
}

/// A fully validated signer. Values are forwarded to the template verbatim;
/// dates in particular are never parsed or reformatted here.
#[derive(Debug, Clone)]
pub struct SignerProfile {
    pub signer_name: String,
    pub signer_email: String,
    pub candidate_role: String,
    pub start_date: String,
    pub end_date: String,
    pub position_of_guide: String,
}

impl SendOfferRequest {
    /// Presence check on every field; incomplete submissions are rejected
    /// rather than forwarded with holes.
    pub fn validate(self) -> Result<SignerProfile, DocusignError> {
        Ok(SignerProfile {
            signer_name: require("signerName", self.signer_name)?,
            signer_email: require("signerEmail", self.signer_email)?,
            candidate_role: require("CandidateRole", self.candidate_role)?,
            start_date: require("StartDate", self.start_date)?,
            end_date: require("EndDate", self.end_date)?,
            position_of_guide: require("PositionOfGuide", self.position_of_guide)?,
        })
    }
}

fn require(label: &str, value: Option<String>) -> Result<String, DocusignError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DocusignError::ValidationError(format!(
            "missing required field `{label}`"
        ))),
    }
}

// --- Structures for the DocuSign envelope payload ---

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDefinition {
    pub template_id: String,
    pub template_roles: Vec<TemplateRole>,
    pub status: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRole {
    pub email: String,
    pub name: String,
    pub role_name: String,
    pub tabs: Tabs,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    pub text_tabs: Vec<TextTab>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TextTab {
    pub tab_label: String,
    pub value: String,
}

#[derive(Deserialize, Debug)]
struct EnvelopeSummary {
    #[serde(rename = "envelopeId")]
    envelope_id: String,
}

/// Response to the agent once the envelope is on its way.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SendOfferResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Envelope sent"))]
    pub message: String,
    #[serde(rename = "envelopeId")]
    #[cfg_attr(feature = "openapi", schema(example = "4a8e07bb-1c4b-4b51-9e91-6c2117a4f9d2"))]
    pub envelope_id: String,
}

// --- Core Logic Functions ---

/// Binds the signer to the offer template. Pure; performs no I/O.
///
/// Status is always "sent": the envelope goes out for signature immediately
/// instead of being saved as a draft.
pub fn compose_envelope(profile: &SignerProfile, template_id: &str) -> EnvelopeDefinition {
    let tabs = Tabs {
        text_tabs: vec![
            text_tab("CandidateName", &profile.signer_name),
            text_tab("CandidateRole", &profile.candidate_role),
            text_tab("StartDate", &profile.start_date),
            text_tab("EndDate", &profile.end_date),
            text_tab("PositionOfGuide", &profile.position_of_guide),
        ],
    };

    EnvelopeDefinition {
        template_id: template_id.to_string(),
        template_roles: vec![TemplateRole {
            email: profile.signer_email.clone(),
            name: profile.signer_name.clone(),
            role_name: SIGNER_ROLE_NAME.to_string(),
            tabs,
        }],
        status: "sent".to_string(),
    }
}

fn text_tab(label: &str, value: &str) -> TextTab {
    TextTab {
        tab_label: label.to_string(),
        value: value.to_string(),
    }
}

/// Submits the composed envelope under the granted account and returns the
/// provider-assigned envelope id.
pub async fn create_envelope(
    grant: &AccessGrant,
    envelope: &EnvelopeDefinition,
) -> Result<String, DocusignError> {
    let api_url = format!(
        "{}/v2.1/accounts/{}/envelopes",
        grant.base_path, grant.account_id
    );

    info!("[DocuSign Logic] Creating envelope at {api_url}");

    let response = HTTP_CLIENT
        .post(&api_url)
        .bearer_auth(&grant.access_token)
        .json(envelope)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let summary: EnvelopeSummary = serde_json::from_str(&body_text)?;
        Ok(summary.envelope_id)
    } else {
        let message = extract_error_message(&body_text);
        info!("[DocuSign Logic] Envelope creation failed with HTTP {status}: {message}");
        Err(DocusignError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// The full send sequence: validate → exchange → compose → dispatch.
/// One exchange per call; nothing is retried or rolled back.
pub async fn send_offer(
    config: &DocusignConfig,
    private_key: &str,
    request: SendOfferRequest,
) -> Result<SendOfferResponse, DocusignError> {
    let profile = request.validate()?;

    let client_id = config.client_id.as_deref().ok_or(DocusignError::ConfigError)?;
    let user_guid = config
        .impersonated_user_guid
        .as_deref()
        .ok_or(DocusignError::ConfigError)?;
    let template_id = config
        .template_id
        .as_deref()
        .ok_or(DocusignError::ConfigError)?;
    let oauth_base_url = config.oauth_base_url().ok_or(DocusignError::ConfigError)?;

    let grant = acquire_grant(&oauth_base_url, client_id, user_guid, private_key).await?;
    let envelope = compose_envelope(&profile, template_id);
    let envelope_id = create_envelope(&grant, &envelope).await?;

    info!(
        "Envelope {envelope_id} dispatched to {}",
        profile.signer_email
    );

    Ok(SendOfferResponse {
        message: "Envelope sent".to_string(),
        envelope_id,
    })
}
