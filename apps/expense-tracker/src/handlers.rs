//! Expense routes.

use actix_web::{HttpResponse, http::header::ContentType, web};
use serde_json::Value;

use quill_core::domain::{Amount, NewExpense};
use quill_shared::dto::{CreateExpenseRequest, HealthResponse};

use crate::error::{AppError, AppResult, json_config};
use crate::state::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/expenses")
                .route("", web::post().to(create))
                .route("", web::get().to(list))
                .route("/html", web::get().to(html))
                .route("/total", web::get().to(total)),
        );
}

/// Accept a JSON number or string; `null` counts as missing.
fn parse_amount(value: Option<Value>) -> AppResult<Option<Amount>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|n| Some(Amount::Number(n)))
            .ok_or_else(|| AppError::BadRequest(format!("Amount must be numeric, got {n}"))),
        Some(Value::String(text)) => Ok(Some(Amount::Text(text))),
        Some(other) => Err(AppError::BadRequest(format!(
            "Amount must be numeric, got {other}"
        ))),
    }
}

/// POST /expenses
async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateExpenseRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let expense = state
        .expenses
        .record(NewExpense {
            name: req.name,
            amount: parse_amount(req.amount)?,
        })
        .await?;

    Ok(HttpResponse::Created().json(expense))
}

/// GET /expenses
async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.expenses.list().await)
}

/// GET /expenses/html
async fn html(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.expenses.render_html().await)
}

/// GET /expenses/total
async fn total(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.expenses.total().await)
}

/// GET /health
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: "expense-tracker".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use actix_web::{App, web};
    use serde_json::{Value, json};

    use super::*;

    macro_rules! spawn_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    /// POST a JSON body to `/expenses`, returning the status and JSON reply.
    macro_rules! post_expense {
        ($app:expr, $body:expr) => {{
            let req = TestRequest::post().uri("/expenses").set_json($body).to_request();
            let resp = test::call_service(&$app, req).await;
            let status = resp.status();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }};
    }

    #[actix_rt::test]
    async fn test_record_and_total() {
        let app = spawn_app!();

        let (status, coffee) = post_expense!(app, json!({ "name": "coffee", "amount": 5 }));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(coffee, json!({ "id": 1, "name": "coffee", "amount": 5 }));

        let (status, tea) = post_expense!(app, json!({ "name": "tea", "amount": "3" }));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(tea["id"], 2);
        assert_eq!(tea["amount"], "3");

        let req = TestRequest::get().uri("/expenses/total").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "total": 8 }));

        let req = TestRequest::get().uri("/expenses").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["name"], "coffee");
    }

    #[actix_rt::test]
    async fn test_html_fragment() {
        let app = spawn_app!();
        post_expense!(app, json!({ "name": "fish & chips", "amount": 12.5 }));

        let req = TestRequest::get().uri("/expenses/html").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"<div id="expenses"><div>fish &amp; chips: $12.5</div></div>"#
        );
    }

    #[actix_rt::test]
    async fn test_invalid_expenses_are_rejected() {
        let app = spawn_app!();

        for body in [
            json!({ "amount": 5 }),
            json!({ "name": "", "amount": 5 }),
            json!({ "name": "coffee" }),
            json!({ "name": "coffee", "amount": 0 }),
            json!({ "name": "coffee", "amount": null }),
        ] {
            let (status, error) = post_expense!(app, body);
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error["detail"], "Name and amount required");
        }

        let (status, _) = post_expense!(app, json!({ "name": "coffee", "amount": "five" }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = post_expense!(app, json!({ "name": "coffee", "amount": [5] }));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let req = TestRequest::get().uri("/expenses").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    #[actix_rt::test]
    async fn test_health_check() {
        let app = spawn_app!();
        let req = TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["service"], "expense-tracker");
    }
}
