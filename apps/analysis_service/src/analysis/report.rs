use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Models sometimes return `user_guidance` as a bare string instead of a
/// list. Both shapes decode; a bare string becomes a single step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserGuidance {
    Steps(Vec<String>),
    Single(String),
}

impl Default for UserGuidance {
    fn default() -> Self {
        UserGuidance::Steps(Vec::new())
    }
}

impl UserGuidance {
    pub fn into_steps(self) -> Vec<String> {
        match self {
            UserGuidance::Steps(steps) => steps,
            UserGuidance::Single(step) => vec![step],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub manipulation_techniques: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub user_guidance: UserGuidance,
}
