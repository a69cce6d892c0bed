// Mock interview engine: question bank, answer evaluation, session tracking, summaries.
// Handlers stay thin; all scoring goes through the `AnswerEvaluator` held in `AppState`.

pub mod evaluator;
pub mod handlers;
pub mod models;
pub mod question_bank;
pub mod session;
pub mod store;
pub mod summary;
