//! HTTP handlers for the assessment API.
//!
//! Each submission is processed start-to-finish in its handler: the
//! engine functions are pure, so re-invoking a handler with the same
//! input is naturally idempotent.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::assessment::matching::{match_groups, JobGroup, MatchScore};
use crate::assessment::questions::{Category, MAX_RATING, MIN_RATING, QUESTIONS};
use crate::assessment::scoring::{aggregate, AssessmentResult, Guidance};
use crate::errors::AppError;
use crate::extract::{DOCX_MIME, PDF_MIME, TEXT_MIME};
use crate::sink::ResultRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub text: &'static str,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionView>,
    pub min_rating: u8,
    pub max_rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub email: String,
    pub ratings: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub submission_id: Uuid,
    pub result: AssessmentResult,
    pub guidance: Guidance,
}

#[derive(Debug, Serialize)]
pub struct MatchSubmitResponse {
    pub submission_id: Uuid,
    pub result: AssessmentResult,
    pub guidance: Guidance,
    pub matches: Vec<MatchScore>,
}

/// GET /api/v1/questions
pub async fn handle_get_questions() -> Json<QuestionListResponse> {
    let questions = QUESTIONS
        .iter()
        .enumerate()
        .map(|(position, q)| QuestionView {
            position,
            text: q.text,
            category: q.category,
        })
        .collect();

    Json(QuestionListResponse {
        questions,
        min_rating: MIN_RATING,
        max_rating: MAX_RATING,
    })
}

/// POST /api/v1/assessments
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    validate_email(&req.email)?;
    let result = aggregate(&req.ratings).map_err(|e| AppError::Validation(e.to_string()))?;
    let guidance = Guidance::for_tier(result.risk_tier);

    persist(&state, &result, &req.email, "").await;

    Ok(Json(SubmitResponse {
        submission_id: Uuid::new_v4(),
        result,
        guidance,
    }))
}

/// POST /api/v1/assessments/match
///
/// Multipart form: `email`, `ratings` (JSON array), `job_titles`
/// (comma-separated), `resume` (file). Scores the submission, then
/// matches the uploaded résumé against fetched postings per title.
pub async fn handle_submit_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchSubmitResponse>, AppError> {
    let form = MatchForm::from_multipart(multipart).await?;

    validate_email(&form.email)?;
    let result = aggregate(&form.ratings).map_err(|e| AppError::Validation(e.to_string()))?;
    let guidance = Guidance::for_tier(result.risk_tier);

    let resume_text = state.extractor.extract(&form.resume, &form.resume_mime);

    // Fetch failures have already degraded to empty snippet lists inside
    // the client (no retry, no backoff); an empty group scores 0% like
    // any other group with no tokens.
    let mut groups = Vec::new();
    for title in parse_job_titles(&form.job_titles_raw) {
        let documents = state.job_board.fetch(&title).await;
        groups.push(JobGroup { title, documents });
    }

    let matches = match_groups(&resume_text, &groups);

    persist(&state, &result, &form.email, &form.job_titles_raw).await;

    Ok(Json(MatchSubmitResponse {
        submission_id: Uuid::new_v4(),
        result,
        guidance,
        matches,
    }))
}

struct MatchForm {
    email: String,
    ratings: Vec<u8>,
    job_titles_raw: String,
    resume: Vec<u8>,
    resume_mime: String,
}

impl MatchForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut email = None;
        let mut ratings = None;
        let mut job_titles_raw = None;
        let mut resume = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "email" => email = Some(read_text(field).await?),
                "ratings" => {
                    let text = read_text(field).await?;
                    let parsed: Vec<u8> = serde_json::from_str(&text).map_err(|e| {
                        AppError::Upload(format!(
                            "ratings field must be a JSON array of integers: {e}"
                        ))
                    })?;
                    ratings = Some(parsed);
                }
                "job_titles" => job_titles_raw = Some(read_text(field).await?),
                "resume" => {
                    let declared = field.content_type().map(str::to_string);
                    let filename = field.file_name().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?;
                    resume = Some((
                        data.to_vec(),
                        resolve_mime(declared.as_deref(), filename.as_deref()),
                    ));
                }
                other => {
                    warn!("ignoring unexpected multipart field '{other}'");
                }
            }
        }

        let (resume, resume_mime) =
            resume.ok_or_else(|| AppError::Upload("missing 'resume' file field".to_string()))?;

        Ok(MatchForm {
            email: email.ok_or_else(|| AppError::Upload("missing 'email' field".to_string()))?,
            ratings: ratings
                .ok_or_else(|| AppError::Upload("missing 'ratings' field".to_string()))?,
            job_titles_raw: job_titles_raw.unwrap_or_default(),
            resume,
            resume_mime,
        })
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(|e| AppError::Upload(e.to_string()))
}

/// Picks the mime the extractor should see: the declared content type
/// when it is specific, otherwise a guess from the file extension.
fn resolve_mime(declared: Option<&str>, filename: Option<&str>) -> String {
    if let Some(mime) = declared {
        if mime != "application/octet-stream" {
            return mime.to_string();
        }
    }
    let extension = filename
        .and_then(|f| f.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => PDF_MIME.to_string(),
        Some("docx") => DOCX_MIME.to_string(),
        Some("txt") => TEXT_MIME.to_string(),
        _ => declared.unwrap_or_default().to_string(),
    }
}

fn parse_job_titles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "a valid email address is required".to_string(),
        ));
    }
    Ok(())
}

/// Appends the submission to the result sink. Fire-and-forget: a failed
/// append is logged and must not fail the request.
async fn persist(state: &AppState, result: &AssessmentResult, email: &str, job_titles_raw: &str) {
    let row = ResultRow {
        submitted_at: Utc::now(),
        email: email.to_string(),
        average_score: result.average_score,
        risk_tier: result.risk_tier,
        job_titles_raw: job_titles_raw.to_string(),
    };
    if let Err(e) = state.sink.append(&row).await {
        warn!("failed to record assessment for {email}: {e:#}");
    }
}
