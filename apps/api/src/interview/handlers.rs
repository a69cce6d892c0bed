//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{Evaluation, Role};
use crate::interview::question_bank;
use crate::interview::session::{Progress, Session, Submission, RETRY_MESSAGE};
use crate::interview::summary::{build_summary, InterviewSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    /// Left untyped so a non-string role is an invalid role, not a body rejection.
    pub role: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartInterviewResponse {
    pub session_id: Uuid,
    pub role: Role,
    pub first_question: String,
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session_id: Option<Value>,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub question_completed: bool,
    pub interview_complete: bool,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeat_question: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
}

impl SubmitAnswerResponse {
    fn new(submission: Submission, total_questions: usize) -> Self {
        let mut response = SubmitAnswerResponse {
            evaluation: submission.evaluation,
            question_completed: true,
            interview_complete: false,
            total_questions,
            question_number: None,
            next_question: None,
            repeat_question: false,
            current_question: None,
            retry_message: None,
            final_score: None,
        };

        match submission.progress {
            Progress::Repeat {
                question,
                question_number,
            } => {
                response.question_completed = false;
                response.repeat_question = true;
                response.current_question = Some(question);
                response.question_number = Some(question_number);
                response.retry_message = Some(RETRY_MESSAGE.to_string());
            }
            Progress::Advanced {
                next_question,
                question_number,
            } => {
                response.next_question = Some(next_question);
                response.question_number = Some(question_number);
            }
            Progress::Completed { final_score } => {
                response.interview_complete = true;
                response.final_score = Some(final_score);
            }
        }

        response
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelInterviewResponse {
    pub session_id: Uuid,
    pub cancelled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleInfo {
    pub role: Role,
    pub display_name: String,
    pub total_questions: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleInfo>> {
    let per_session = state.config.questions_per_session;
    let roles = question_bank::roles()
        .iter()
        .map(|role| {
            let bank_size = question_bank::questions(*role).len();
            RoleInfo {
                role: *role,
                display_name: role.display_name().to_string(),
                total_questions: per_session.map_or(bank_size, |n| n.min(bank_size)),
            }
        })
        .collect();
    Json(roles)
}

/// POST /api/start-interview
///
/// Opens a session for the role and returns its first question.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let role = parse_role(req.role.as_ref())?;

    let questions = question_bank::draw(
        role,
        state.config.questions_per_session,
        &mut rand::thread_rng(),
    );
    let session = Session::new(role, questions);
    let first_question = session
        .current_question()
        .ok_or_else(|| anyhow::anyhow!("question bank for {} is empty", role.as_str()))?
        .to_string();
    let total_questions = session.total_questions();

    let session_id = state.sessions.insert(session).await;
    info!(%session_id, role = role.as_str(), total_questions, "interview started");

    Ok(Json(StartInterviewResponse {
        session_id,
        role,
        first_question,
        total_questions,
    }))
}

/// POST /api/submit-answer
///
/// Scores the answer. Satisfactory answers advance to the next question;
/// anything else repeats the current one.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    let session_id = parse_session_id(req.session_id.as_ref())?;
    let answer = req.answer.trim();
    let evaluator = state.evaluator.clone();

    let response = state
        .sessions
        .with_session(session_id, |session| {
            let submission = session.submit(answer, evaluator.as_ref())?;
            if session.is_completed() {
                info!(
                    %session_id,
                    answered = session.answers.len(),
                    "interview completed"
                );
            }
            Ok(SubmitAnswerResponse::new(
                submission,
                session.total_questions(),
            ))
        })
        .await?;

    Ok(Json(response))
}

/// POST /api/cancel-interview
pub async fn handle_cancel_interview(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<CancelInterviewResponse>, AppError> {
    let session_id = parse_session_id(req.session_id.as_ref())?;
    let session = state.sessions.remove(session_id).await?;
    info!(
        %session_id,
        answered = session.answers.len(),
        "interview cancelled"
    );

    Ok(Json(CancelInterviewResponse {
        session_id,
        cancelled: true,
    }))
}

/// POST /api/get-summary
pub async fn handle_get_summary(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<InterviewSummary>, AppError> {
    let session_id = parse_session_id(req.session_id.as_ref())?;
    let session = state.sessions.get(session_id).await?;
    Ok(Json(build_summary(&session)?))
}

fn parse_role(raw: Option<&Value>) -> Result<Role, AppError> {
    raw.and_then(Value::as_str)
        .and_then(Role::parse)
        .ok_or(AppError::InvalidRole)
}

/// Missing, non-string and malformed ids are indistinguishable from unknown ones.
fn parse_session_id(raw: Option<&Value>) -> Result<Uuid, AppError> {
    raw.and_then(Value::as_str)
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
        .ok_or(AppError::InvalidSession)
}
