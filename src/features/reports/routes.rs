use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Report CRUD routes (all behind the bearer-token middleware; delete
/// additionally requires the admin role)
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            post(handlers::create_report).get(handlers::list_reports),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report)
                .put(handlers::update_report)
                .delete(handlers::delete_report),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::shared::constants::{ROLE_ADMIN, ROLE_WORKER};
    use crate::shared::test_helpers::{with_auth, InMemoryReportStore};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn worker() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Mirko".to_string(),
            role: ROLE_WORKER.to_string(),
        }
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Chef".to_string(),
            role: ROLE_ADMIN.to_string(),
        }
    }

    fn server_as(user: AuthenticatedUser) -> TestServer {
        let service = Arc::new(ReportService::new(Arc::new(InMemoryReportStore::default())));
        TestServer::new(with_auth(routes(service), user)).unwrap()
    }

    fn valid_report() -> Value {
        json!({
            "report_date": "21.08.2026",
            "site": "BS Nord",
            "work_start": "08:00",
            "work_end": "16:30",
            "break_hours": "0,5",
            "helper_name": "Ivan",
            "helper_hours": "7,5"
        })
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let server = server_as(worker());

        let created = server.post("/api/reports").json(&valid_report()).await;
        created.assert_status_ok();
        let body: Value = created.json();
        assert_eq!(body["data"]["net_hours"], json!(8.0));
        assert_eq!(body["data"]["created_by_name"], json!("Mirko"));

        let listed = server.get("/api/reports").await;
        listed.assert_status_ok();
        let body: Value = listed.json();
        assert_eq!(body["meta"]["total"], json!(1));
        assert_eq!(body["data"][0]["site"], json!("BS Nord"));
    }

    #[tokio::test]
    async fn create_without_site_is_rejected() {
        let server = server_as(worker());

        let response = server
            .post("/api/reports")
            .json(&json!({ "report_date": "21.08.2026" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].as_str().unwrap().contains("site"));
    }

    #[tokio::test]
    async fn update_recomputes_net_hours() {
        let server = server_as(worker());

        let created = server.post("/api/reports").json(&valid_report()).await;
        let id = created.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let mut form = valid_report();
        form["work_end"] = json!("17:00");
        let updated = server.put(&format!("/api/reports/{}", id)).json(&form).await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Value>()["data"]["net_hours"], json!(8.5));
    }

    #[tokio::test]
    async fn delete_requires_admin_role() {
        let server = server_as(worker());

        let created = server.post("/api/reports").json(&valid_report()).await;
        let id = created.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server.delete(&format!("/api/reports/{}", id)).await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn admin_can_delete() {
        let server = server_as(admin());

        let created = server.post("/api/reports").json(&valid_report()).await;
        let id = created.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server.delete(&format!("/api/reports/{}", id)).await;
        response.assert_status_ok();

        let missing = server.get(&format!("/api/reports/{}", id)).await;
        missing.assert_status_not_found();
    }
}
