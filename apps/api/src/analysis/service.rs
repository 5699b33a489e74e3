//! Analysis pipeline: extract → prompt → one provider call → map.

use tracing::info;

use crate::analysis::extract::{extract_text, ResumeUpload};
use crate::analysis::mapping::map_reply;
use crate::analysis::models::Analysis;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;

pub async fn analyze_resume(
    llm: &dyn CompletionBackend,
    upload: &ResumeUpload,
    job_description: &str,
    max_resume_chars: usize,
) -> Result<Analysis, AppError> {
    let resume_text = extract_text(upload, max_resume_chars).await?;
    info!(
        "Extracted {} chars from '{}'",
        resume_text.chars().count(),
        upload.file_name
    );

    let prompt = build_analysis_prompt(&resume_text, job_description);
    let reply = llm.complete(&prompt, ANALYSIS_SYSTEM).await?;
    info!("AI reply received ({} chars)", reply.len());

    Ok(map_reply(&reply, &upload.file_name))
}
