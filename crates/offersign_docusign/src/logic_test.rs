#[cfg(test)]
mod tests {
    use crate::error::{extract_error_message, DocusignError};
    use crate::logic::{compose_envelope, SendOfferRequest, SendOfferResponse, SIGNER_ROLE_NAME};
    use offersign_common::HttpStatusCode;
    use offersign_config::DocusignConfig;
    use serde_json::json;

    fn complete_request() -> SendOfferRequest {
        SendOfferRequest {
            signer_name: Some("Jane Doe".to_string()),
            signer_email: Some("jane.doe@example.com".to_string()),
            candidate_role: Some("Backend Engineer".to_string()),
            start_date: Some("2025-09-01".to_string()),
            end_date: Some("2026-02-28".to_string()),
            position_of_guide: Some("Engineering Lead".to_string()),
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        let profile = complete_request().validate().unwrap();
        assert_eq!(profile.signer_name, "Jane Doe");
        assert_eq!(profile.signer_email, "jane.doe@example.com");
        assert_eq!(profile.candidate_role, "Backend Engineer");
        assert_eq!(profile.start_date, "2025-09-01");
        assert_eq!(profile.end_date, "2026-02-28");
        assert_eq!(profile.position_of_guide, "Engineering Lead");
    }

    #[test]
    fn validate_rejects_missing_field() {
        let mut request = complete_request();
        request.signer_name = None;
        let err = request.validate().unwrap_err();
        match err {
            DocusignError::ValidationError(msg) => assert!(msg.contains("signerName")),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_field() {
        let mut request = complete_request();
        request.end_date = Some("   ".to_string());
        let err = request.validate().unwrap_err();
        match err {
            DocusignError::ValidationError(msg) => assert!(msg.contains("EndDate")),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn inbound_field_names_match_the_wire() {
        let request: SendOfferRequest = serde_json::from_value(json!({
            "signerName": "Jane Doe",
            "signerEmail": "jane.doe@example.com",
            "CandidateRole": "Backend Engineer",
            "StartDate": "2025-09-01",
            "EndDate": "2026-02-28",
            "PositionOfGuide": "Engineering Lead"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn compose_binds_five_tabs_verbatim() {
        let profile = complete_request().validate().unwrap();
        let envelope = compose_envelope(&profile, "tmpl-1");

        assert_eq!(envelope.template_id, "tmpl-1");
        assert_eq!(envelope.status, "sent");
        assert_eq!(envelope.template_roles.len(), 1);

        let role = &envelope.template_roles[0];
        assert_eq!(role.role_name, SIGNER_ROLE_NAME);
        assert_eq!(role.email, "jane.doe@example.com");
        assert_eq!(role.name, "Jane Doe");

        let tabs: Vec<(&str, &str)> = role
            .tabs
            .text_tabs
            .iter()
            .map(|tab| (tab.tab_label.as_str(), tab.value.as_str()))
            .collect();
        assert_eq!(
            tabs,
            vec![
                ("CandidateName", "Jane Doe"),
                ("CandidateRole", "Backend Engineer"),
                ("StartDate", "2025-09-01"),
                ("EndDate", "2026-02-28"),
                ("PositionOfGuide", "Engineering Lead"),
            ]
        );
    }

    #[test]
    fn envelope_serializes_with_provider_field_names() {
        let profile = complete_request().validate().unwrap();
        let envelope = compose_envelope(&profile, "tmpl-1");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["templateId"], "tmpl-1");
        assert_eq!(value["status"], "sent");
        assert_eq!(value["templateRoles"][0]["roleName"], "Candidate");
        assert_eq!(
            value["templateRoles"][0]["tabs"]["textTabs"][0]["tabLabel"],
            "CandidateName"
        );
    }

    #[test]
    fn response_wire_shape_is_stable() {
        let response = SendOfferResponse {
            message: "Envelope sent".to_string(),
            envelope_id: "ENV-123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "message": "Envelope sent", "envelopeId": "ENV-123" })
        );
    }

    #[test]
    fn error_message_extraction_prefers_provider_message() {
        assert_eq!(
            extract_error_message(r#"{"errorCode":"TEMPLATE_ID_INVALID","message":"Template not found"}"#),
            "Template not found"
        );
        assert_eq!(
            extract_error_message(r#"{"error":"consent_required"}"#),
            "consent_required"
        );
        assert_eq!(extract_error_message("upstream blew up"), "upstream blew up");
    }

    #[test]
    fn caller_errors_are_400_and_provider_errors_500() {
        assert_eq!(
            DocusignError::ValidationError("missing".into()).status_code(),
            400
        );
        assert_eq!(DocusignError::AuthError("denied".into()).status_code(), 500);
        assert_eq!(
            DocusignError::ApiError {
                status_code: 404,
                message: "nope".into()
            }
            .status_code(),
            500
        );
        assert_eq!(DocusignError::ConfigError.status_code(), 500);
    }

    #[tokio::test]
    async fn send_offer_validates_before_any_provider_call() {
        let mut request = complete_request();
        request.signer_email = None;
        // Empty config would fail later; validation must reject first.
        let err = crate::logic::send_offer(&DocusignConfig::default(), "unused", request)
            .await
            .unwrap_err();
        assert!(matches!(err, DocusignError::ValidationError(_)));
    }

    #[tokio::test]
    async fn send_offer_requires_complete_configuration() {
        let err = crate::logic::send_offer(&DocusignConfig::default(), "unused", complete_request())
            .await
            .unwrap_err();
        assert!(matches!(err, DocusignError::ConfigError));
    }
}
