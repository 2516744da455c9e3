//! Unit and integration tests for swatchsheet-api

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use swatchsheet::{CmykColor, Deviation, ReferenceTable, RenderRequest};
use swatchsheet_api::{app, AppState, ErrorResponse, GeneratePdfRequest};
use tower::util::ServiceExt;

const TABLE: &str = r#"[
    {"pantone": "Pantone 300 C", "c": 100, "m": 44, "y": 0, "k": 0},
    {"pantone": "Pantone 3005 C", "c": 100, "m": 34, "y": 0, "k": 2},
    {"pantone": "Pantone 185 C", "c": 0, "m": 93, "y": 79, "k": 0}
]"#;

fn state_with_table() -> AppState {
    AppState::new(Some(ReferenceTable::from_json(TABLE).unwrap()))
}

async fn post_json(state: AppState, uri: &str, body: Value) -> Response {
    app(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(state: AppState, uri: &str) -> Response {
    app(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use axum::response::IntoResponse;
    use swatchsheet::SwatchError;
    use swatchsheet_api::{AppError, DeviationInput};

    #[test]
    fn test_request_deserialization() {
        let request: GeneratePdfRequest = serde_json::from_value(json!({
            "cmyk": {"c": 100, "m": 10, "y": 2, "k": 32},
            "deviation": 5,
            "comment": "press check",
            "pantone": ""
        }))
        .unwrap();

        assert_eq!(request.cmyk, CmykColor::new(100.0, 10.0, 2.0, 32.0));
        assert_eq!(request.deviation, DeviationInput::Number(5.0));

        let render = request.to_render_request().unwrap();
        assert_eq!(render.comment.as_deref(), Some("press check"));
        assert_eq!(render.reference_name, None);
    }

    #[test]
    fn test_request_clamps_channels() {
        let request: GeneratePdfRequest = serde_json::from_value(json!({
            "cmyk": {"c": 130, "m": -10, "y": 2, "k": 32},
            "deviation": "3"
        }))
        .unwrap();

        assert_eq!(request.cmyk.channels(), [100.0, 0.0, 2.0, 32.0]);
        assert_eq!(request.to_render_request().unwrap().deviation.value(), 3);
    }

    #[test]
    fn test_deviation_input_validation() {
        assert!(DeviationInput::Number(1.0).to_deviation().is_ok());
        assert!(DeviationInput::Number(10.0).to_deviation().is_ok());
        assert!(DeviationInput::Text(" 7 ".to_string()).to_deviation().is_ok());
        assert!(DeviationInput::Number(0.0).to_deviation().is_err());
        assert!(DeviationInput::Number(11.0).to_deviation().is_err());
        assert!(DeviationInput::Number(2.5).to_deviation().is_err());
        assert!(DeviationInput::Number(-1.0).to_deviation().is_err());
        assert!(DeviationInput::Text("five".to_string()).to_deviation().is_err());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            error: "Test error message".to_string(),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["error"], "Test error message");
    }

    #[test]
    fn test_app_error_status_codes() {
        let cases = [
            (AppError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("gone".to_string()), StatusCode::NOT_FOUND),
            (
                AppError::from(SwatchError::InvalidDeviation(0)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(SwatchError::UnknownReference("x".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(SwatchError::FontError("no metrics".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("panicked".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let response = get(AppState::default(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "swatchsheet API");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_generate_pdf_success() {
        let response = post_json(
            AppState::default(),
            "/generate-pdf",
            json!({"cmyk": {"c": 100, "m": 10, "y": 2, "k": 32}, "deviation": 5}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"cmyk_variants.pdf\""
        );

        let body = body_bytes(response).await;
        assert!(body.starts_with(b"%PDF-1.7"));
    }

    #[tokio::test]
    async fn test_generate_pdf_matches_library_output() {
        let response = post_json(
            AppState::default(),
            "/generate-pdf",
            json!({
                "cmyk": {"c": 100, "m": 10, "y": 2, "k": 32},
                "deviation": 5,
                "comment": "press check",
                "pantone": "Pantone 3005 C"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let expected = RenderRequest::new(
            CmykColor::new(100.0, 10.0, 2.0, 32.0),
            Deviation::new(5).unwrap(),
        )
        .with_comment("press check")
        .with_reference_name("Pantone 3005 C")
        .render()
        .unwrap();
        assert_eq!(body_bytes(response).await, expected);
    }

    #[tokio::test]
    async fn test_blank_comment_and_pantone_are_absent() {
        let blank = post_json(
            AppState::default(),
            "/generate-pdf",
            json!({
                "cmyk": {"c": 20, "m": 30, "y": 40, "k": 50},
                "deviation": 2,
                "comment": "  ",
                "pantone": ""
            }),
        )
        .await;
        let absent = post_json(
            AppState::default(),
            "/generate-pdf",
            json!({"cmyk": {"c": 20, "m": 30, "y": 40, "k": 50}, "deviation": 2}),
        )
        .await;

        assert_eq!(body_bytes(blank).await, body_bytes(absent).await);
    }

    #[tokio::test]
    async fn test_generate_pdf_rejects_deviation_out_of_range() {
        for deviation in [json!(0), json!(11), json!("12")] {
            let response = post_json(
                AppState::default(),
                "/generate-pdf",
                json!({"cmyk": {"c": 0, "m": 0, "y": 0, "k": 0}, "deviation": deviation}),
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
            assert!(error.error.contains("between 1 and 10"));
        }
    }

    #[tokio::test]
    async fn test_generate_pdf_invalid_json() {
        let response = app(AppState::default())
            .oneshot(
                Request::builder()
                    .uri("/generate-pdf")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from("invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let error: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!error.error.is_empty());
    }

    #[tokio::test]
    async fn test_generate_pdf_missing_field_is_json_error() {
        let response = post_json(
            AppState::default(),
            "/generate-pdf",
            json!({"cmyk": {"c": 100, "m": 10, "y": 2, "k": 32}}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(error.error.contains("deviation"), "{}", error.error);
    }

    #[tokio::test]
    async fn test_generate_pdf_missing_cmyk() {
        let response = post_json(AppState::default(), "/generate-pdf", json!({"deviation": 5})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("cmyk"));
    }

    #[tokio::test]
    async fn test_generate_pdf_without_content_type() {
        let response = app(AppState::default())
            .oneshot(
                Request::builder()
                    .uri("/generate-pdf")
                    .method("POST")
                    .body(Body::from(r#"{"cmyk": {"c": 0, "m": 0, "y": 0, "k": 0}, "deviation": 5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_search_references() {
        let response = get(state_with_table(), "/api/references?q=300").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["pantone"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Pantone 300 C", "Pantone 3005 C"]);
        assert_eq!(json[0]["m"], 44.0);
    }

    #[tokio::test]
    async fn test_search_references_limit_and_empty_query() {
        let json = body_json(get(state_with_table(), "/api/references?limit=2").await).await;
        assert_eq!(json.as_array().unwrap().len(), 2);

        let json = body_json(get(state_with_table(), "/api/references?q=PANTONE%20185").await).await;
        assert_eq!(json[0]["pantone"], "Pantone 185 C");
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_limit() {
        let response = get(state_with_table(), "/api/references?limit=many").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_search_without_table_is_empty() {
        let response = get(AppState::default(), "/api/references?q=300").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_reference() {
        let response = get(state_with_table(), "/api/references/pantone%20185%20c").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["pantone"], "Pantone 185 C");
        assert_eq!(json["y"], 79.0);
    }

    #[tokio::test]
    async fn test_get_unknown_reference() {
        let response = get(state_with_table(), "/api/references/Pantone%209999%20C").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Pantone 9999 C"));
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let response = app(AppState::default())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .method("GET")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
