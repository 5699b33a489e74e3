//! Maps the model's reply text onto an `Analysis`.
//!
//! Never fails. A reply that is empty, not JSON, or the wrong shape produces
//! `Analysis::empty`; a reply that is mostly right keeps every section and
//! list item that decodes on its own.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::analysis::models::{value_to_string, Analysis, Recommendation, RequiredSkill, Score};
use crate::llm_client::extract_json_object;

pub fn map_reply(reply: &str, file_name: &str) -> Analysis {
    let Some(json) = extract_json_object(reply) else {
        warn!(
            "AI reply contained no JSON object ({} chars), returning empty analysis",
            reply.len()
        );
        return Analysis::empty(file_name);
    };

    let root = match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!("AI reply JSON was not an object: {}", type_name(&other));
            return Analysis::empty(file_name);
        }
        Err(e) => {
            warn!("AI reply JSON did not parse: {e}");
            return Analysis::empty(file_name);
        }
    };

    let root = unwrap_envelope(root);

    let analysis = Analysis {
        file_name: file_name.to_string(),
        candidate_info: section(&root, "candidateInfo"),
        required_skills: items::<RequiredSkill>(&root, "requiredSkills")
            .into_iter()
            .filter(|s| !s.name.is_empty())
            .collect(),
        recommendations: items::<Recommendation>(&root, "recommendations")
            .into_iter()
            .filter(|r| !r.title.is_empty() || !r.description.is_empty())
            .collect(),
        score: section::<Score>(&root, "score"),
        additional_skills: root
            .get("additionalSkills")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .map(value_to_string)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
    };

    debug!(
        "Mapped analysis: {} required skills, {} recommendations, {} additional skills, overall score {}",
        analysis.required_skills.len(),
        analysis.recommendations.len(),
        analysis.additional_skills.len(),
        analysis.score.overall_score
    );

    analysis
}

/// Some replies nest everything under a single `"analysis"` key.
fn unwrap_envelope(mut root: Map<String, Value>) -> Map<String, Value> {
    let has_sections = ["candidateInfo", "requiredSkills", "score"]
        .iter()
        .any(|k| root.contains_key(*k));
    if has_sections {
        return root;
    }
    match root.remove("analysis") {
        Some(Value::Object(inner)) => inner,
        Some(other) => {
            root.insert("analysis".to_string(), other);
            root
        }
        None => root,
    }
}

/// Decodes one object section, falling back to its default.
fn section<T: DeserializeOwned + Default>(root: &Map<String, Value>, key: &str) -> T {
    match root.get(key) {
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("Ignoring malformed '{key}' section: {e}");
            T::default()
        }),
        Some(Value::Null) | None => T::default(),
        Some(other) => {
            warn!("Ignoring '{key}' section of type {}", type_name(other));
            T::default()
        }
    }
}

/// Decodes each element of an array section independently, skipping bad ones.
fn items<T: DeserializeOwned>(root: &Map<String, Value>, key: &str) -> Vec<T> {
    let Some(arr) = root.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    arr.iter()
        .filter(|v| v.is_object())
        .filter_map(|v| match serde_json::from_value(v.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed '{key}' entry: {e}");
                None
            }
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
