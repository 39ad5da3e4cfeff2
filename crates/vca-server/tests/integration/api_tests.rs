//! Router-level tests against the real pipeline with stubbed backends
//!
//! The router runs over a real AssistService wired to the null embedding
//! and chat providers, so requests exercise the actual pipeline without a
//! network. The generation backend is scripted per test.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vca_application::domain_services::{GenerationEngine, GenerationSettings};
use vca_application::use_cases::AssistService;
use vca_domain::ports::providers::{EmbeddingProvider, VectorIndex};
use vca_domain::value_objects::CorpusDocument;
use vca_providers::chat::{NullChatProvider, ScriptedResponse};
use vca_providers::clock::ManualClock;
use vca_providers::embedding::NullEmbeddingProvider;
use vca_providers::index::FlatVectorIndex;
use vca_providers::memory::InMemoryConversationMemory;
use vca_server::routes::app_router;
use vca_server::state::AppState;

/// Build a router over a small embedded corpus and a scripted chat backend
async fn test_router(script: Vec<ScriptedResponse>) -> Router {
    let embedder = Arc::new(NullEmbeddingProvider::new());

    let documents = vec![
        CorpusDocument::new("dog", "Dog fever above 39.4C warrants a vet visit."),
        CorpusDocument::new("cat", "Cats hide pain; appetite loss is a warning sign."),
    ];
    let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
    let embeddings = embedder.embed_batch(&texts).await.unwrap();
    let index = FlatVectorIndex::build(
        embedder.dimensions(),
        documents
            .iter()
            .map(|d| d.species.clone())
            .zip(embeddings)
            .collect::<Vec<_>>(),
    )
    .unwrap();

    let engine = GenerationEngine::new(
        Arc::new(NullChatProvider::with_script(script)),
        Arc::new(ManualClock::new()),
        GenerationSettings::default(),
    );
    let assist = AssistService::new(
        embedder,
        Arc::new(index) as Arc<dyn VectorIndex>,
        Arc::new(documents),
        Arc::new(InMemoryConversationMemory::new()),
        engine,
    );

    app_router(AppState {
        assist: Arc::new(assist),
    })
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let router = test_router(vec![]).await;
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
async fn chat_returns_canned_answer_verbatim() {
    let router = test_router(vec![ScriptedResponse::Chunks(vec![
        "  A fever above 39.4C warrants a vet visit.  ".to_string(),
    ])])
    .await;

    let response = router
        .oneshot(json_request(
            "/veterinary-chat",
            serde_json::json!({
                "message": "What should I do if my dog has a fever?",
                "species": "dog"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["response"],
        "A fever above 39.4C warrants a vet visit."
    );
}

#[tokio::test]
async fn chat_without_message_is_rejected_with_error_key() {
    let router = test_router(vec![]).await;
    let response = router
        .oneshot(json_request(
            "/veterinary-chat",
            serde_json::json!({"species": "dog"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No message provided");
}

#[tokio::test]
async fn get_response_answers_under_the_response_key() {
    let router = test_router(vec![ScriptedResponse::Chunks(vec![
        "Keep the dog hydrated.".to_string(),
    ])])
    .await;

    let response = router
        .oneshot(json_request(
            "/get_response/",
            serde_json::json!({
                "query": "What should I do if my dog has a fever?",
                "species": "dog"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "Keep the dog hydrated.");
}

#[tokio::test]
async fn assist_without_message_or_image_is_rejected() {
    let router = test_router(vec![]).await;
    let response = router
        .oneshot(json_request(
            "/veterinary-assist",
            serde_json::json!({"species": "cat"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn assist_json_chat_reports_null_analysis() {
    let router = test_router(vec![ScriptedResponse::Chunks(vec![
        "Watch for appetite loss.".to_string(),
    ])])
    .await;

    let response = router
        .oneshot(json_request(
            "/veterinary-assist",
            serde_json::json!({"message": "Is my cat okay?", "species": "cat"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "Watch for appetite loss.");
    assert_eq!(body["analysis"], serde_json::Value::Null);
}

#[tokio::test]
async fn retry_exhaustion_degrades_to_fallback_with_http_200() {
    let router = test_router(vec![
        ScriptedResponse::TransportFailure("reset".to_string()),
        ScriptedResponse::TransportFailure("reset".to_string()),
        ScriptedResponse::TransportFailure("reset".to_string()),
    ])
    .await;

    let response = router
        .oneshot(json_request(
            "/veterinary-chat",
            serde_json::json!({"message": "Is my dog okay?"}),
        ))
        .await
        .unwrap();

    // The failure is absorbed: readable prose, not an error status.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["response"],
        "Unable to process the request at this time. Please try again later."
    );
}

#[tokio::test]
async fn assist_multipart_image_produces_analysis_and_answer() {
    let router = test_router(vec![ScriptedResponse::Chunks(vec![
        "That looks inflamed; see a vet.".to_string(),
    ])])
    .await;

    // A small solid-red PNG trips the redness heuristic.
    let mut png = Vec::new();
    let image = image::RgbImage::from_pixel(32, 32, image::Rgb([220, 40, 40]));
    image::DynamicImage::ImageRgb8(image)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageOutputFormat::Png,
        )
        .unwrap();

    let boundary = "vca-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"species\"\r\n\r\ndog\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"paw.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&png);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/veterinary-assist")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["analysis"],
        "Redness detected in the image, which might indicate irritation."
    );
    assert_eq!(body["response"], "That looks inflamed; see a vet.");
}
