// Shared prompt constants.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output contract appended to every structured prompt.
pub const FENCED_JSON_INSTRUCTION: &str = "\
    Respond with exactly one JSON object wrapped in a ```json code fence. \
    Do NOT include any text before or after the fence. \
    Use the exact field names shown. Use empty strings or empty arrays for \
    information that is not present; never invent facts.";
