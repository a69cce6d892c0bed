use std::sync::Arc;

use crate::config::Config;
use crate::interview::evaluator::{AnswerEvaluator, KeywordAnswerEvaluator};
use crate::interview::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory session tracker. Sessions do not survive a restart.
    pub sessions: Arc<SessionStore>,
    /// Pluggable answer evaluator. Default: KeywordAnswerEvaluator.
    pub evaluator: Arc<dyn AnswerEvaluator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: Arc::new(SessionStore::new()),
            evaluator: Arc::new(KeywordAnswerEvaluator),
        }
    }
}
