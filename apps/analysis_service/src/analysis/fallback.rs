use super::report::{AnalysisReport, RiskLevel, UserGuidance};

/// The static analysis shown whenever the live call cannot produce one
/// (missing key, API failure, undecodable reply). Keeps the page working
/// for demos even with a dead key.
pub fn demo_report() -> AnalysisReport {
    AnalysisReport {
        risk_level: RiskLevel::High,
        manipulation_techniques: vec![
            "Urgency (Immediate action required)".to_string(),
            "Fear mongering (Threat of account suspension)".to_string(),
            "Authority bias (Impersonating Bank Security)".to_string(),
        ],
        explanation: "[DEMO MODE] The message uses urgent language and threats to bypass \
                      critical thinking. Real banks do not ask for sensitive info via SMS."
            .to_string(),
        user_guidance: UserGuidance::Steps(vec![
            "Do not click the link.".to_string(),
            "Call the bank using the number on your card.".to_string(),
            "Forward to 7726 (SPAM).".to_string(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_report_carries_the_fixed_values() {
        let report = demo_report();

        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(
            report.manipulation_techniques,
            vec![
                "Urgency (Immediate action required)",
                "Fear mongering (Threat of account suspension)",
                "Authority bias (Impersonating Bank Security)",
            ]
        );
        assert!(report.explanation.starts_with("[DEMO MODE]"));
        assert_eq!(
            report.user_guidance.clone().into_steps(),
            vec![
                "Do not click the link.",
                "Call the bank using the number on your card.",
                "Forward to 7726 (SPAM).",
            ]
        );
    }

    #[test]
    fn demo_report_serializes_with_the_reply_schema_keys() {
        let value = serde_json::to_value(demo_report()).unwrap();

        assert_eq!(value["risk_level"], "High");
        assert!(value["manipulation_techniques"].is_array());
        assert!(value["explanation"].is_string());
        assert!(value["user_guidance"].is_array());
    }
}
