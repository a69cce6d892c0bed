//! Per-session interview state machine: `in_progress → completed`.
//!
//! Unsatisfactory answers keep the session on the same question. Satisfactory
//! answers are recorded and advance the index; answering the last question
//! completes the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluator::{round_to_tenth, AnswerEvaluator};
use crate::interview::models::{AnsweredQuestion, Evaluation, Role};

pub const RETRY_MESSAGE: &str =
    "Let me ask the same question again. Please provide a more detailed answer.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub role: Role,
    pub questions: Vec<String>,
    pub current_index: usize,
    pub answers: Vec<AnsweredQuestion>,
    pub scores: Vec<f64>,
    pub started_at: DateTime<Utc>,
    pub status: SessionStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Where the session stands after an answer was scored.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Answer rejected; the same question is asked again.
    Repeat { question: String, question_number: usize },
    /// Answer accepted; `next_question` is now current.
    Advanced {
        next_question: String,
        question_number: usize,
    },
    /// Answer accepted and it was the last one.
    Completed { final_score: f64 },
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub evaluation: Evaluation,
    pub progress: Progress,
}

impl Session {
    pub fn new(role: Role, questions: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            questions,
            current_index: 0,
            answers: Vec::new(),
            scores: Vec::new(),
            started_at: Utc::now(),
            status: SessionStatus::InProgress,
            completed_at: None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// The question awaiting an answer. `None` once the session is completed.
    pub fn current_question(&self) -> Option<&str> {
        if self.is_completed() {
            return None;
        }
        self.questions.get(self.current_index).map(String::as_str)
    }

    /// Unrounded mean of accepted scores. `None` until something was accepted.
    pub fn mean_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
    }

    /// Mean of accepted scores, one decimal.
    pub fn final_score(&self) -> Option<f64> {
        self.mean_score().map(round_to_tenth)
    }

    /// Scores `answer` against the current question and moves the state machine.
    pub fn submit(
        &mut self,
        answer: &str,
        evaluator: &dyn AnswerEvaluator,
    ) -> Result<Submission, AppError> {
        if self.is_completed() {
            return Err(AppError::InterviewCompleted);
        }

        let question = self
            .current_question()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "session {} has no question at index {} of {}",
                    self.id,
                    self.current_index,
                    self.questions.len()
                )
            })?
            .to_string();

        let evaluation = evaluator.evaluate(&question, answer, self.role);
        let progress = self.apply(question, answer, &evaluation)?;

        Ok(Submission {
            evaluation,
            progress,
        })
    }

    fn apply(
        &mut self,
        question: String,
        answer: &str,
        evaluation: &Evaluation,
    ) -> Result<Progress, AppError> {
        if !evaluation.is_satisfactory {
            return Ok(Progress::Repeat {
                question,
                question_number: self.current_index + 1,
            });
        }

        self.answers.push(AnsweredQuestion {
            question,
            answer: answer.to_string(),
            score: evaluation.score,
            feedback: evaluation.feedback.clone(),
        });
        self.scores.push(evaluation.score);
        self.current_index += 1;

        if self.current_index < self.questions.len() {
            return Ok(Progress::Advanced {
                next_question: self.questions[self.current_index].clone(),
                question_number: self.current_index + 1,
            });
        }

        self.status = SessionStatus::Completed;
        self.completed_at = Some(Utc::now());

        let final_score = self
            .final_score()
            .ok_or_else(|| anyhow::anyhow!("session {} completed with no scores", self.id))?;
        Ok(Progress::Completed { final_score })
    }
}
