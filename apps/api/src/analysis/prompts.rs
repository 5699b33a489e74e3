// All LLM prompt constants for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::FENCED_JSON_INSTRUCTION;

/// System instruction for resume analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an expert technical recruiter and resume reviewer. \
    You compare a candidate's resume against a job description and report, \
    precisely and without embellishment, which requirements the resume covers, \
    how well it matches overall, and what the candidate should change.";

/// Analysis instructions. `build_analysis_prompt` fills `{output_instruction}`
/// and appends the two documents after it.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Compare the RESUME below against the JOB DESCRIPTION below.

1. Extract the candidate's contact details and current role from the resume.
2. Extract every skill the job description asks for. For each, decide whether the resume shows it.
3. Score the match from 0 to 100 overall and for skills, experience, education and keywords.
4. Recommend concrete changes to the resume, most important first.
5. List skills the resume shows that the job description does not ask for.

Return a JSON object with this EXACT schema:
{
  "candidateInfo": {
    "name": "Jane Doe",
    "email": "jane@example.com",
    "phone": "+1 555 0100",
    "location": "City, Country",
    "experience": "5 years",
    "currentRole": "Software Engineer"
  },
  "requiredSkills": [
    {"name": "Python", "status": "Found", "importance": "High"}
  ],
  "recommendations": [
    {
      "type": "Critical",
      "title": "Short imperative title",
      "description": "One or two sentences explaining the change.",
      "impact": "High"
    }
  ],
  "score": {
    "overallScore": 75,
    "skillsMatch": 80,
    "experienceMatch": 70,
    "educationMatch": 60,
    "keywordsMatch": 65
  },
  "additionalSkills": ["Docker"]
}

VOCABULARIES (use exactly these strings):
- requiredSkills[].status: "Found", "Partially Found", "Missing"
- requiredSkills[].importance: "High", "Medium", "Low"
- recommendations[].type: "Critical", "Improvement", "Optimization", "Enhancement"
- recommendations[].impact: "High", "Medium", "Low"
- every score field is an integer from 0 to 100

{output_instruction}"#;

/// Documents are appended rather than substituted so their contents are never
/// scanned for placeholders.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    let instructions =
        ANALYSIS_PROMPT_TEMPLATE.replace("{output_instruction}", FENCED_JSON_INSTRUCTION);
    format!(
        "{instructions}\n\nRESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{}",
        job_description.trim()
    )
}
