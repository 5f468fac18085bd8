pub struct ScamAnalysisPrompt;

impl ScamAnalysisPrompt {
    pub fn get_prompt(message: &str) -> String {
        format!(
            r#"You are a cyber safety analyst.

Analyze the following message for psychological and social engineering manipulation patterns commonly used in scams.

Do not assume malicious intent.
Do not claim certainty.

Return ONLY a valid JSON object with exactly the following keys:
- risk_level: Low / Medium / High
- manipulation_techniques: list
- explanation: simple explanation for a non-technical user
- user_guidance: safe actions the user can take

Do not include any text outside the JSON.

Message:
{}"#,
            message
        )
    }
}
