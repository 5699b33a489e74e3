//! Axum route handlers for the Analysis API.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::extract::ResumeUpload;
use crate::analysis::models::Analysis;
use crate::analysis::service::analyze_resume;
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
const MISSING_INPUT_MESSAGE: &str = "Resume and job description are required";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    pub success: bool,
}

/// POST /api/analyze
///
/// Multipart fields: `resume` (file) and `jobDescription` (text).
/// Inputs are checked before configuration, and both before any provider call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::Validation(format!("Expected a multipart form: {e}")))?;

    let mut resume: Option<ResumeUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().trim().to_string();
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                resume = Some(ResumeUpload {
                    file_name: if file_name.is_empty() {
                        RESUME_FIELD.to_string()
                    } else {
                        file_name
                    },
                    content_type,
                    bytes,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    // A browser submits an empty file part when no file was chosen.
    let resume = resume.filter(|r| !r.bytes.is_empty());
    let job_description = job_description.filter(|jd| !jd.trim().is_empty());
    let (Some(resume), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::MissingInput(MISSING_INPUT_MESSAGE.to_string()));
    };

    if !state.llm.is_configured() {
        return Err(AppError::MissingConfiguration(
            "GEMINI_API_KEY is not set".to_string(),
        ));
    }

    info!(
        "Analyzing '{}' ({} bytes) against a {} char job description",
        resume.file_name,
        resume.bytes.len(),
        job_description.len()
    );

    let analysis = analyze_resume(
        state.llm.as_ref(),
        &resume,
        &job_description,
        state.config.max_resume_chars,
    )
    .await
    .inspect_err(|e| warn!("Analysis of '{}' failed: {e}", resume.file_name))?;

    Ok(Json(AnalyzeResponse {
        analysis,
        success: true,
    }))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("The uploaded file is too large".to_string())
    } else {
        AppError::Validation(err.body_text())
    }
}
