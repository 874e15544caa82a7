use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extractor::{parse_resume, SkillExtraction};
use crate::state::AppState;

/// Response envelope for resume parsing. Extraction failures are reported
/// inside the envelope with `status = "error"`; the dashboard always has a
/// manual-entry fallback, so this is not a transport failure.
#[derive(Debug, Serialize)]
pub struct ResumeParseResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub extracted_skills: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
}

impl ResumeParseResponse {
    fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message),
            extracted_skills: vec![],
            education: vec![],
            experience_years: 0,
            text_length: None,
            text_preview: None,
        }
    }
}

/// POST /parse-resume
///
/// Accepts a multipart upload with a `file` field holding a PDF resume.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeParseResponse>, AppError> {
    let (filename, contents) = read_file_field(&mut multipart).await?;

    if !filename.ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }

    match parse_resume(&contents, &state.matcher) {
        Ok(parsed) => {
            info!(
                filename,
                skills = parsed.skills.len(),
                text_length = parsed.text_length,
                "parsed resume"
            );
            Ok(Json(ResumeParseResponse {
                status: "success".to_string(),
                message: None,
                extracted_skills: parsed.skills,
                education: parsed.education,
                experience_years: parsed.experience_years,
                text_length: Some(parsed.text_length),
                text_preview: Some(parsed.text_preview),
            }))
        }
        Err(e) => {
            warn!(filename, error = %e, "resume extraction failed");
            Ok(Json(ResumeParseResponse::error(e.to_string())))
        }
    }
}

/// Pulls the `file` field out of the multipart stream.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Upload is missing a filename".to_string()))?
            .to_string();
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((filename, contents));
    }

    Err(AppError::Validation(
        "Request is missing a 'file' field".to_string(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct TestExtractionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TestExtractionResponse {
    pub input_length: usize,
    pub skills_found: usize,
    pub skills: Vec<String>,
    pub skills_by_category: std::collections::BTreeMap<String, Vec<String>>,
}

/// POST /test-skill-extraction
///
/// Runs the skill matcher over raw text. Debugging aid for the vocabulary.
pub async fn handle_test_extraction(
    State(state): State<AppState>,
    Json(req): Json<TestExtractionRequest>,
) -> Json<TestExtractionResponse> {
    let SkillExtraction {
        skills,
        by_category,
    } = state.matcher.extract(&req.text);

    Json(TestExtractionResponse {
        input_length: req.text.len(),
        skills_found: skills.len(),
        skills,
        skills_by_category: by_category,
    })
}
