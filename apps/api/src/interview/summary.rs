use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::evaluator::round_to_tenth;
use crate::interview::models::{AnsweredQuestion, Role};
use crate::interview::session::Session;

/// Final report for a completed interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub role: Role,
    pub final_score: f64,
    pub total_questions: usize,
    pub overall_feedback: String,
    pub detailed_results: Vec<AnsweredQuestion>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: i64,
}

/// Builds the summary. Only completed sessions have one.
pub fn build_summary(session: &Session) -> Result<InterviewSummary, AppError> {
    let completed_at = match (session.is_completed(), session.completed_at) {
        (true, Some(at)) => at,
        _ => return Err(AppError::InterviewNotCompleted),
    };
    let mean_score = session
        .mean_score()
        .ok_or_else(|| anyhow::anyhow!("completed session {} has no scores", session.id))?;
    let final_score = round_to_tenth(mean_score);

    Ok(InterviewSummary {
        role: session.role,
        final_score,
        total_questions: session.total_questions(),
        overall_feedback: overall_feedback(mean_score).to_string(),
        detailed_results: session.answers.clone(),
        started_at: session.started_at,
        completed_at,
        duration_seconds: (completed_at - session.started_at).num_seconds(),
    })
}

/// Banded on the unrounded mean, so 7.96 is still "good", not "outstanding".
pub fn overall_feedback(mean_score: f64) -> &'static str {
    match mean_score {
        s if s >= 8.0 => "Outstanding performance! You demonstrated excellent knowledge and communication skills throughout the interview.",
        s if s >= 6.0 => "Good performance overall. You showed relevant experience and knowledge with room for improvement in some areas.",
        s if s >= 4.0 => "Adequate performance. Focus on providing more detailed examples and demonstrating deeper knowledge in future interviews.",
        _ => "There's significant room for improvement. Consider practicing more specific examples and developing stronger responses.",
    }
}
