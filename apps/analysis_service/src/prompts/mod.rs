pub mod scam_analysis_prompt;
