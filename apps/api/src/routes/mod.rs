pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roles", get(handlers::handle_list_roles))
        .route(
            "/api/start-interview",
            post(handlers::handle_start_interview),
        )
        .route("/api/submit-answer", post(handlers::handle_submit_answer))
        .route(
            "/api/cancel-interview",
            post(handlers::handle_cancel_interview),
        )
        .route("/api/get-summary", post(handlers::handle_get_summary))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::interview::handlers::{
        CancelInterviewResponse, RoleInfo, StartInterviewResponse, SubmitAnswerResponse,
    };
    use crate::interview::models::Role;
    use crate::interview::summary::InterviewSummary;
    use crate::routes::health::HealthResponse;

    const GOOD_ANSWER: &str = "In one project I developed an internal api and the database \
                               schema behind it, reviewed code for the software team, \
                               tracked down a memory bug and cleaned up our git history.";

    fn server_with(config: Config) -> TestServer {
        TestServer::new(build_router(AppState::new(config))).unwrap()
    }

    fn server() -> TestServer {
        server_with(Config::default())
    }

    async fn start(server: &TestServer, role: &str) -> StartInterviewResponse {
        let response = server
            .post("/api/start-interview")
            .json(&json!({ "role": role }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    async fn submit(server: &TestServer, session_id: &str, answer: &str) -> SubmitAnswerResponse {
        let response = server
            .post("/api/submit-answer")
            .json(&json!({ "session_id": session_id, "answer": answer }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    fn error_code(body: &Value) -> &str {
        body["error"]["code"].as_str().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_health_reports_active_sessions() {
        let server = server();
        start(&server, "product_manager").await;

        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.active_sessions, 1);
    }

    #[tokio::test]
    async fn test_list_roles() {
        let response = server().get("/api/roles").await;
        response.assert_status_ok();
        let roles: Vec<RoleInfo> = response.json();
        assert_eq!(roles.len(), 5);
        assert_eq!(roles[0].role, Role::SoftwareEngineer);
        assert_eq!(roles[0].display_name, "Software Engineer");
        assert!(roles.iter().all(|r| r.total_questions == 5));
    }

    #[tokio::test]
    async fn test_start_interview_returns_first_question() {
        let started = start(&server(), "software_engineer").await;
        assert_eq!(started.role, Role::SoftwareEngineer);
        assert_eq!(started.total_questions, 5);
        assert_eq!(
            started.first_question,
            "Tell me about yourself and your experience in software development."
        );
    }

    #[tokio::test]
    async fn test_start_interview_respects_questions_per_session() {
        let server = server_with(Config {
            questions_per_session: Some(2),
            ..Config::default()
        });
        let started = start(&server, "data_scientist").await;
        assert_eq!(started.total_questions, 2);
    }

    #[tokio::test]
    async fn test_start_interview_rejects_invalid_role() {
        let server = server();
        for body in [
            json!({ "role": "astronaut" }),
            json!({}),
            json!({ "role": 5 }),
            json!({ "role": null }),
        ] {
            let response = server.post("/api/start-interview").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(error_code(&body), "INVALID_ROLE");
            assert_eq!(body["error"]["message"], "Invalid role selected");
        }
    }

    #[tokio::test]
    async fn test_weak_answer_repeats_question() {
        let server = server();
        let started = start(&server, "software_engineer").await;
        let id = started.session_id.to_string();

        let result = submit(&server, &id, "I like computers.").await;
        assert!(!result.evaluation.is_satisfactory);
        assert!(!result.question_completed);
        assert!(result.repeat_question);
        assert_eq!(result.question_number, Some(1));
        assert_eq!(result.current_question, Some(started.first_question));
        assert!(result.retry_message.is_some());
        assert!(result.next_question.is_none());
    }

    #[tokio::test]
    async fn test_empty_answer_scores_minimum() {
        let server = server();
        let started = start(&server, "marketing_manager").await;

        let result = submit(&server, &started.session_id.to_string(), "   ").await;
        assert_eq!(result.evaluation.score, 1.0);
        assert!(!result.evaluation.is_satisfactory);
        assert!(result.repeat_question);
    }

    #[tokio::test]
    async fn test_full_interview_then_summary() {
        let server = server();
        let started = start(&server, "software_engineer").await;
        let id = started.session_id.to_string();

        for n in 2..=5 {
            let result = submit(&server, &id, GOOD_ANSWER).await;
            assert!(result.question_completed);
            assert!(!result.interview_complete);
            assert_eq!(result.question_number, Some(n));
            assert!(result.next_question.is_some());
        }

        let last = submit(&server, &id, GOOD_ANSWER).await;
        assert!(last.interview_complete);
        assert_eq!(last.final_score, Some(10.0));

        let response = server
            .post("/api/submit-answer")
            .json(&json!({ "session_id": id, "answer": GOOD_ANSWER }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&response.json()), "INTERVIEW_COMPLETED");

        let response = server
            .post("/api/get-summary")
            .json(&json!({ "session_id": id }))
            .await;
        response.assert_status_ok();
        let summary: InterviewSummary = response.json();
        assert_eq!(summary.total_questions, 5);
        assert_eq!(summary.detailed_results.len(), 5);
        assert_eq!(summary.final_score, 10.0);
        assert!(summary.overall_feedback.starts_with("Outstanding"));
    }

    #[tokio::test]
    async fn test_summary_rejects_incomplete_interview() {
        let server = server();
        let started = start(&server, "sales_representative").await;

        let response = server
            .post("/api/get-summary")
            .json(&json!({ "session_id": started.session_id }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&response.json()), "INTERVIEW_NOT_COMPLETED");
    }

    #[tokio::test]
    async fn test_cancel_removes_session() {
        let server = server();
        let started = start(&server, "product_manager").await;
        let id = started.session_id.to_string();

        let response = server
            .post("/api/cancel-interview")
            .json(&json!({ "session_id": id }))
            .await;
        response.assert_status_ok();
        let cancelled: CancelInterviewResponse = response.json();
        assert!(cancelled.cancelled);
        assert_eq!(cancelled.session_id, started.session_id);

        for path in ["/api/submit-answer", "/api/get-summary", "/api/cancel-interview"] {
            let response = server
                .post(path)
                .json(&json!({ "session_id": id, "answer": GOOD_ANSWER }))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(error_code(&response.json()), "INVALID_SESSION", "{path}");
        }
    }

    #[tokio::test]
    async fn test_non_string_session_id_is_invalid_session_everywhere() {
        let server = server();
        for path in ["/api/submit-answer", "/api/get-summary", "/api/cancel-interview"] {
            let response = server
                .post(path)
                .json(&json!({ "session_id": 123, "answer": "hello" }))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(error_code(&body), "INVALID_SESSION", "{path}");
            assert_eq!(body["error"]["message"], "Invalid session", "{path}");
        }
    }

    #[tokio::test]
    async fn test_invalid_session_ids() {
        let server = server();
        for body in [
            json!({ "answer": "hello" }),
            json!({ "session_id": "not-a-uuid", "answer": "hello" }),
            json!({ "session_id": uuid::Uuid::new_v4(), "answer": "hello" }),
            json!({ "session_id": 123, "answer": "hello" }),
        ] {
            let response = server.post("/api/submit-answer").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(error_code(&body), "INVALID_SESSION");
            assert_eq!(body["error"]["message"], "Invalid session");
        }
    }
}
