use serde_json::Value;

/// Pulls the reply text out of a provider payload.
///
/// Accepted shapes, in order:
/// - a top-level `text` string
/// - a top-level `output_text` string
/// - `candidates[0].content.parts[*].text`, concatenated
///
/// Returns `None` when no shape matches or the text is empty.
pub fn extract_response_text(payload: &Value) -> Option<String> {
    let text = flat_text(payload).or_else(|| candidate_text(payload))?;

    if text.trim().is_empty() {
        return None;
    }

    Some(text)
}

fn flat_text(payload: &Value) -> Option<String> {
    ["text", "output_text"]
        .iter()
        .find_map(|key| payload.get(key).and_then(|t| t.as_str()))
        .map(|t| t.to_string())
}

fn candidate_text(payload: &Value) -> Option<String> {
    let parts = payload["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())?;

    let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();

    if texts.is_empty() {
        return None;
    }

    Some(texts.concat())
}
