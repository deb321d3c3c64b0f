// --- File: crates/offersign_docusign/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{SendOfferRequest, SendOfferResponse};

#[utoipa::path(
    post,
    path = "/send-offer",
    request_body(content = SendOfferRequest, example = json!({
        "signerName": "Jane Doe",
        "signerEmail": "jane.doe@example.com",
        "CandidateRole": "Backend Engineer",
        "StartDate": "2025-09-01",
        "EndDate": "2026-02-28",
        "PositionOfGuide": "Engineering Lead"
    })),
    params(
        ("x-agent-auth" = String, Header, description = "Shared agent secret; required on every route")
    ),
    responses(
        (status = 200, description = "Envelope created and dispatched for signature", body = SendOfferResponse),
        (status = 400, description = "Missing signer fields"),
        (status = 401, description = "Missing or wrong shared secret"),
        (status = 500, description = "Provider authentication or dispatch failure")
    ),
    tag = "DocuSign"
)]
fn doc_send_offer_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_send_offer_handler),
    components(schemas(SendOfferRequest, SendOfferResponse)),
    tags(
        (name = "DocuSign", description = "Offer envelope dispatch API")
    )
)]
pub struct DocusignApiDoc;
