//! Display records for a resume analysis.
//!
//! Serialized camelCase for the dashboard. Deserialization accepts casing,
//! spelling and numeric-type variations; an unrecognized value takes the
//! field's default instead of failing the record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Whether a required skill shows up in the resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum SkillStatus {
    Found,
    #[serde(rename = "Partially Found")]
    PartiallyFound,
    #[default]
    Missing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum SkillImportance {
    High,
    Medium,
    #[default]
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum RecommendationType {
    Critical,
    #[default]
    Improvement,
    Optimization,
    Enhancement,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum RecommendationImpact {
    High,
    Medium,
    #[default]
    Low,
}

/// Lowercases and drops separators so "Partially Found", "partially_found"
/// and "PARTIALLY-FOUND" compare equal.
fn normalize_label(value: &Value) -> String {
    value
        .as_str()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<Value> for SkillStatus {
    fn from(value: Value) -> Self {
        if value.as_bool() == Some(true) {
            return SkillStatus::Found;
        }
        match normalize_label(&value).as_str() {
            "found" | "present" | "matched" | "match" | "yes" => SkillStatus::Found,
            "partiallyfound" | "partial" | "partially" | "partialmatch" => {
                SkillStatus::PartiallyFound
            }
            _ => SkillStatus::Missing,
        }
    }
}

impl From<Value> for SkillImportance {
    fn from(value: Value) -> Self {
        match normalize_label(&value).as_str() {
            "high" | "critical" | "required" => SkillImportance::High,
            "medium" | "moderate" => SkillImportance::Medium,
            _ => SkillImportance::Low,
        }
    }
}

impl From<Value> for RecommendationType {
    fn from(value: Value) -> Self {
        match normalize_label(&value).as_str() {
            "critical" => RecommendationType::Critical,
            "optimization" | "optimisation" => RecommendationType::Optimization,
            "enhancement" => RecommendationType::Enhancement,
            _ => RecommendationType::Improvement,
        }
    }
}

impl From<Value> for RecommendationImpact {
    fn from(value: Value) -> Self {
        match normalize_label(&value).as_str() {
            "high" => RecommendationImpact::High,
            "medium" | "moderate" => RecommendationImpact::Medium,
            _ => RecommendationImpact::Low,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub experience: String,
    #[serde(deserialize_with = "lenient_string")]
    pub current_role: String,
}

/// One job-description skill and how well the resume covers it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredSkill {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    pub status: SkillStatus,
    pub importance: SkillImportance,
}

/// A suggested resume change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    pub impact: RecommendationImpact,
}

/// Score breakdown. Every field is a percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Score {
    #[serde(deserialize_with = "percentage")]
    pub overall_score: u8,
    #[serde(deserialize_with = "percentage")]
    pub skills_match: u8,
    #[serde(deserialize_with = "percentage")]
    pub experience_match: u8,
    #[serde(deserialize_with = "percentage")]
    pub education_match: u8,
    #[serde(deserialize_with = "percentage")]
    pub keywords_match: u8,
}

/// The full result rendered by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub file_name: String,
    pub candidate_info: CandidateInfo,
    pub required_skills: Vec<RequiredSkill>,
    pub recommendations: Vec<Recommendation>,
    pub score: Score,
    pub additional_skills: Vec<String>,
}

impl Analysis {
    /// An analysis with nothing in it, used when the reply is unusable.
    pub fn empty(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field deserializers
// ────────────────────────────────────────────────────────────────────────────

/// Accepts strings, numbers and booleans; anything else becomes "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(&Value::deserialize(deserializer)?))
}

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Accepts `87`, `87.4`, `"87"`, `"87%"`; clamps to 0..=100; junk is 0.
fn percentage<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_status_variants() {
        let parse = |v: Value| SkillStatus::from(v);
        assert_eq!(parse(json!("Found")), SkillStatus::Found);
        assert_eq!(parse(json!("Partially Found")), SkillStatus::PartiallyFound);
        assert_eq!(parse(json!("partially_found")), SkillStatus::PartiallyFound);
        assert_eq!(parse(json!("PARTIAL")), SkillStatus::PartiallyFound);
        assert_eq!(parse(json!("Missing")), SkillStatus::Missing);
        assert_eq!(parse(json!("no idea")), SkillStatus::Missing);
        assert_eq!(parse(json!(null)), SkillStatus::Missing);
        assert_eq!(parse(json!(true)), SkillStatus::Found);
    }

    #[test]
    fn test_skill_status_serializes_display_label() {
        assert_eq!(
            serde_json::to_value(SkillStatus::PartiallyFound).unwrap(),
            json!("Partially Found")
        );
        assert_eq!(serde_json::to_value(SkillStatus::Found).unwrap(), json!("Found"));
    }

    #[test]
    fn test_importance_and_impact_defaults() {
        assert_eq!(SkillImportance::from(json!("HIGH")), SkillImportance::High);
        assert_eq!(SkillImportance::from(json!(3)), SkillImportance::Low);
        assert_eq!(
            RecommendationImpact::from(json!("medium")),
            RecommendationImpact::Medium
        );
        assert_eq!(RecommendationImpact::from(json!("")), RecommendationImpact::Low);
    }

    #[test]
    fn test_recommendation_type_falls_back_to_improvement() {
        assert_eq!(
            RecommendationType::from(json!("critical")),
            RecommendationType::Critical
        );
        assert_eq!(
            RecommendationType::from(json!("Optimisation")),
            RecommendationType::Optimization
        );
        assert_eq!(
            RecommendationType::from(json!("rewrite")),
            RecommendationType::Improvement
        );
    }

    #[test]
    fn test_score_accepts_numbers_and_strings() {
        let score: Score = serde_json::from_value(json!({
            "overallScore": 78.6,
            "skillsMatch": "85",
            "experienceMatch": "70%",
            "educationMatch": 140,
            "keywordsMatch": -5
        }))
        .unwrap();
        assert_eq!(score.overall_score, 79);
        assert_eq!(score.skills_match, 85);
        assert_eq!(score.experience_match, 70);
        assert_eq!(score.education_match, 100);
        assert_eq!(score.keywords_match, 0);
    }

    #[test]
    fn test_score_missing_fields_default_to_zero() {
        let score: Score = serde_json::from_value(json!({"overallScore": 50})).unwrap();
        assert_eq!(score.overall_score, 50);
        assert_eq!(score.skills_match, 0);
        assert_eq!(score.keywords_match, 0);
    }

    #[test]
    fn test_candidate_info_tolerates_odd_types() {
        let info: CandidateInfo = serde_json::from_value(json!({
            "name": "  Ada Lovelace ",
            "phone": 5551234,
            "experience": null,
            "currentRole": ["not", "a", "string"]
        }))
        .unwrap();
        assert_eq!(info.name, "Ada Lovelace");
        assert_eq!(info.phone, "5551234");
        assert_eq!(info.experience, "");
        assert_eq!(info.current_role, "");
        assert_eq!(info.email, "");
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = Recommendation {
            kind: RecommendationType::Critical,
            title: "Add Kubernetes".to_string(),
            description: "Mention your cluster work.".to_string(),
            impact: RecommendationImpact::High,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "Critical");
        assert_eq!(value["impact"], "High");
    }

    #[test]
    fn test_empty_analysis_keeps_file_name() {
        let analysis = Analysis::empty("resume.pdf");
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["fileName"], "resume.pdf");
        assert_eq!(value["requiredSkills"], json!([]));
        assert_eq!(value["score"]["overallScore"], 0);
        assert_eq!(value["candidateInfo"]["currentRole"], "");
    }
}
