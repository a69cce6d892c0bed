//! Answer Evaluation — pluggable, trait-based scorer for free-text interview answers.
//!
//! Default: `KeywordAnswerEvaluator` (pure-Rust, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn AnswerEvaluator>`, chosen at startup.

use tracing::debug;

use crate::interview::models::{Evaluation, Role};

// ────────────────────────────────────────────────────────────────────────────
// Scoring constants
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
/// Minimum score for an answer to count as satisfactory.
pub const SATISFACTORY_SCORE: f64 = 5.0;

const BASE_SCORE: f64 = 1.0;
const MAX_KEYWORD_SCORE: usize = 4;
const MAX_LENGTH_SCORE: f64 = 3.0;
const WORDS_PER_LENGTH_POINT: f64 = 10.0;
const EXAMPLE_BONUS: f64 = 2.0;
/// Fewer keyword hits than this flags missing terminology.
const MIN_KEYWORD_MATCHES: usize = 2;

const EXAMPLE_INDICATORS: &[&str] = &[
    "example",
    "project",
    "experience",
    "worked on",
    "implemented",
    "developed",
    "managed",
    "led",
];

// ────────────────────────────────────────────────────────────────────────────
// Role criteria
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct RoleCriteria {
    pub keywords: &'static [&'static str],
    pub min_words: usize,
}

pub fn criteria_for(role: Role) -> RoleCriteria {
    let keywords: &'static [&'static str] = match role {
        Role::SoftwareEngineer => &[
            "code",
            "programming",
            "development",
            "algorithm",
            "bug",
            "debug",
            "git",
            "version",
            "software",
            "technical",
            "framework",
            "database",
            "api",
        ],
        Role::DataScientist => &[
            "data",
            "analysis",
            "machine learning",
            "statistics",
            "python",
            "model",
            "dataset",
            "visualization",
            "analytics",
            "regression",
            "classification",
        ],
        Role::ProductManager => &[
            "product",
            "roadmap",
            "feature",
            "user",
            "customer",
            "metrics",
            "stakeholder",
            "requirement",
            "priority",
            "market",
        ],
        Role::MarketingManager => &[
            "marketing",
            "campaign",
            "brand",
            "customer",
            "digital",
            "social media",
            "analytics",
            "roi",
            "target",
            "strategy",
        ],
        Role::SalesRepresentative => &[
            "sales",
            "customer",
            "client",
            "relationship",
            "revenue",
            "target",
            "crm",
            "negotiation",
            "closing",
            "pipeline",
        ],
    };

    RoleCriteria {
        keywords,
        min_words: 20,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The answer evaluator trait. Implement this to swap scoring backends without
/// touching the session tracker or the handlers.
///
/// Carried in `AppState` as `Arc<dyn AnswerEvaluator>`.
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, question: &str, answer: &str, role: Role) -> Evaluation;
}

/// Keyword / length / example-language heuristic. No external calls.
pub struct KeywordAnswerEvaluator;

impl AnswerEvaluator for KeywordAnswerEvaluator {
    fn evaluate(&self, question: &str, answer: &str, role: Role) -> Evaluation {
        evaluate_answer(question, answer, role)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core heuristic
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single answer.
///
/// score = clamp(1 + min(4, keyword hits) + min(3, words / 10) + (2 if examples), 1, 10)
///
/// Satisfactory iff score ≥ 5 and the answer reaches the role's minimum word count.
pub fn evaluate_answer(question: &str, answer: &str, role: Role) -> Evaluation {
    if answer.trim().is_empty() {
        return Evaluation {
            score: MIN_SCORE,
            feedback: "No answer provided. Please provide a complete response to the question."
                .to_string(),
            is_satisfactory: false,
            specific_issues: vec!["No response given".to_string()],
            improvement_suggestions: vec![
                "Please answer the question with specific examples and details".to_string(),
            ],
        };
    }

    let criteria = criteria_for(role);
    let answer_lower = answer.to_lowercase();
    let word_count = answer.split_whitespace().count();

    let keyword_matches = count_keyword_matches(&answer_lower, criteria.keywords);
    let has_examples = EXAMPLE_INDICATORS
        .iter()
        .any(|indicator| answer_lower.contains(indicator));

    let score = compute_score(keyword_matches, word_count, has_examples);
    let is_satisfactory = score >= SATISFACTORY_SCORE && word_count >= criteria.min_words;

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if word_count < criteria.min_words {
        issues.push("Answer is too brief".to_string());
        suggestions.push("Provide more detailed explanations and examples".to_string());
    }
    if keyword_matches < MIN_KEYWORD_MATCHES {
        issues.push(format!("Missing relevant {} terminology", role.label()));
        suggestions.push(format!(
            "Include specific {} concepts and technologies",
            role.label()
        ));
    }
    if !has_examples {
        issues.push("No specific examples provided".to_string());
        suggestions.push("Share concrete examples from your experience".to_string());
    }

    debug!(
        role = role.as_str(),
        question,
        word_count,
        keyword_matches,
        has_examples,
        score,
        is_satisfactory,
        "evaluated answer"
    );

    Evaluation {
        score,
        feedback: build_feedback(score, &suggestions),
        is_satisfactory,
        specific_issues: issues,
        improvement_suggestions: suggestions,
    }
}

fn count_keyword_matches(answer_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| answer_lower.contains(*keyword))
        .count()
}

fn compute_score(keyword_matches: usize, word_count: usize, has_examples: bool) -> f64 {
    let keyword_score = keyword_matches.min(MAX_KEYWORD_SCORE) as f64;
    let length_score = (word_count as f64 / WORDS_PER_LENGTH_POINT).min(MAX_LENGTH_SCORE);
    let example_score = if has_examples { EXAMPLE_BONUS } else { 0.0 };

    let total = BASE_SCORE + keyword_score + length_score + example_score;
    round_to_tenth(total.clamp(MIN_SCORE, MAX_SCORE))
}

/// Builds the per-answer feedback sentence from the score band.
fn build_feedback(score: f64, suggestions: &[String]) -> String {
    if score >= 8.0 {
        "Excellent answer! You provided relevant details and demonstrated strong experience."
            .to_string()
    } else if score >= 6.0 {
        let nudge = suggestions
            .first()
            .map(String::as_str)
            .unwrap_or("Consider adding more specific examples.");
        format!("Good answer with relevant information. {nudge}")
    } else if score >= 4.0 {
        format!(
            "Your answer addresses the question but needs improvement. {}",
            suggestions
                .iter()
                .take(2)
                .cloned()
                .collect::<Vec<_>>()
                .join(" ")
        )
    } else {
        format!(
            "This answer needs significant improvement. {}",
            suggestions.join(" ")
        )
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
