/// Strip markdown code-fence markers from a model reply so the remainder can
/// be JSON-decoded. Models asked for "ONLY a valid JSON object" still wrap it
/// in ```json fences often enough that this runs on every reply.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
