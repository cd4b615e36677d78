use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use visa_docs::documents::{
    validate_case, CaseRecord, CasePreview, DocumentEngine, DocumentType, PlaceholderPolicy,
    RenderedDocument, RequiredField,
};
use visa_docs::error::AppError;

#[derive(Debug, Serialize)]
pub(crate) struct MissingField {
    pub(crate) field: RequiredField,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidationResponse {
    pub(crate) complete: bool,
    pub(crate) missing: Vec<MissingField>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EncodedDocument {
    pub(crate) document: DocumentType,
    pub(crate) code: &'static str,
    pub(crate) file_name: String,
    pub(crate) content_type: &'static str,
    pub(crate) data_base64: String,
}

impl From<RenderedDocument> for EncodedDocument {
    fn from(rendered: RenderedDocument) -> Self {
        Self {
            document: rendered.kind(),
            code: rendered.kind().code(),
            file_name: rendered.file_name(),
            content_type: "application/pdf",
            data_base64: BASE64.encode(rendered.bytes()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BundleResponse {
    pub(crate) documents: Vec<EncodedDocument>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RenderQuery {
    #[serde(default)]
    pub(crate) force: bool,
}

pub(crate) fn document_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/documents/validate", post(validate_endpoint))
        .route("/api/v1/documents", post(bundle_endpoint))
        .route("/api/v1/documents/placeholders", post(placeholders_endpoint))
        .route("/api/v1/documents/:document", post(document_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn validate_endpoint(Json(case): Json<CaseRecord>) -> Json<ValidationResponse> {
    let missing: Vec<MissingField> = validate_case(&case)
        .into_iter()
        .map(|field| MissingField {
            field,
            label: field.label(),
        })
        .collect();

    Json(ValidationResponse {
        complete: missing.is_empty(),
        missing,
    })
}

pub(crate) async fn placeholders_endpoint(
    Extension(policy): Extension<PlaceholderPolicy>,
    Json(case): Json<CaseRecord>,
) -> Json<CasePreview> {
    Json(CasePreview::new(&case, &policy))
}

pub(crate) async fn document_endpoint(
    Path(document): Path<String>,
    Query(query): Query<RenderQuery>,
    Extension(engine): Extension<DocumentEngine>,
    Json(case): Json<CaseRecord>,
) -> Result<Response, AppError> {
    let kind: DocumentType = document.parse()?;
    ensure_complete(&engine, &case, query.force)?;

    let rendered =
        on_blocking_pool(move || engine.generate_document(kind, &case).map_err(AppError::from))
            .await?;
    info!(document = %kind, bytes = rendered.bytes().len(), forced = query.force, "served document");

    let disposition = format!("attachment; filename=\"{}\"", rendered.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.into_bytes(),
    )
        .into_response())
}

/// Renders all four documents for one case, base64-encoded in a JSON envelope.
pub(crate) async fn bundle_endpoint(
    Query(query): Query<RenderQuery>,
    Extension(engine): Extension<DocumentEngine>,
    Json(case): Json<CaseRecord>,
) -> Result<Json<BundleResponse>, AppError> {
    ensure_complete(&engine, &case, query.force)?;

    let bundle =
        on_blocking_pool(move || engine.generate_all(&case).map_err(AppError::from)).await?;
    info!(documents = bundle.len(), forced = query.force, "served document bundle");

    Ok(Json(BundleResponse {
        documents: bundle.into_iter().map(EncodedDocument::from).collect(),
    }))
}

fn ensure_complete(
    engine: &DocumentEngine,
    case: &CaseRecord,
    force: bool,
) -> Result<(), AppError> {
    let missing = engine.validate(case);
    if missing.is_empty() || force {
        Ok(())
    } else {
        Err(AppError::IncompleteCase(missing))
    }
}

async fn on_blocking_pool<T, F>(render: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(render)
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;
    use visa_docs::config::FontConfig;
    use visa_docs::documents::FontSet;

    fn app(engine: Option<DocumentEngine>) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let router = document_routes()
            .layer(Extension(PlaceholderPolicy::default()))
            .layer(Extension(state));
        match engine {
            Some(engine) => router.layer(Extension(engine)),
            None => router,
        }
    }

    fn engine() -> Option<DocumentEngine> {
        match FontSet::load(&FontConfig::default()) {
            Ok(fonts) => Some(DocumentEngine::new(fonts, PlaceholderPolicy::default())),
            Err(err) => {
                eprintln!("skipping render route test: {err}");
                None
            }
        }
    }

    fn post_json(uri: &str, body: &impl Serialize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(body).expect("request serializes"),
            ))
            .expect("request builds")
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn health_and_readiness_respond() {
        let response = app(None)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(None)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        assert_eq!(json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn validate_lists_missing_fields_in_order() {
        let response = app(None)
            .oneshot(post_json(
                "/api/v1/documents/validate",
                &json!({ "candidate_full_name": "Sita Rai" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["complete"], false);
        let missing = body["missing"].as_array().expect("missing list");
        assert_eq!(missing.len(), 17);
        assert_eq!(missing[0]["field"], "passport_number");
        assert_eq!(missing[0]["label"], "Passport number");
    }

    #[tokio::test]
    async fn placeholders_preview_the_sample_case() {
        let response = app(None)
            .oneshot(post_json(
                "/api/v1/documents/placeholders",
                &CaseRecord::sample(),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["missing"], json!([]));
        assert_eq!(body["placeholders"]["SALARY_RSD"], "55.000,00");
        assert_eq!(body["placeholders"]["NATIONALITY_SR_LOCATIVE"], "Nepalu");
    }

    #[tokio::test]
    async fn unknown_documents_are_not_found() {
        let Some(engine) = engine() else { return };
        let response = app(Some(engine))
            .oneshot(post_json(
                "/api/v1/documents/residence_permit",
                &CaseRecord::sample(),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn incomplete_cases_are_refused_unless_forced() {
        let Some(engine) = engine() else { return };
        let case = CaseRecord {
            salary_rsd: None,
            ..CaseRecord::sample()
        };

        let response = app(Some(engine.clone()))
            .oneshot(post_json("/api/v1/documents/IZJAVA", &case))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["missing"], json!(["salary"]));

        let response = app(Some(engine))
            .oneshot(post_json("/api/v1/documents/IZJAVA?force=true", &case))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn bundles_carry_all_four_documents() {
        let Some(engine) = engine() else { return };
        let response = app(Some(engine))
            .oneshot(post_json("/api/v1/documents", &CaseRecord::sample()))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let documents = body["documents"].as_array().expect("document list");
        let codes: Vec<&str> = documents
            .iter()
            .filter_map(|document| document["code"].as_str())
            .collect();
        assert_eq!(codes, ["UGOVOR", "IZJAVA", "OVLASCENJE", "POZIVNO_PISMO"]);
        assert_eq!(documents[0]["file_name"], "UGOVOR_O_RADU.pdf");

        let encoded = documents[3]["data_base64"].as_str().expect("payload");
        let pdf = BASE64.decode(encoded).expect("valid base64");
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn bundles_refuse_incomplete_cases() {
        let Some(engine) = engine() else { return };
        let response = app(Some(engine))
            .oneshot(post_json("/api/v1/documents", &CaseRecord::default()))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["missing"].as_array().map(Vec::len), Some(18));
    }

    #[tokio::test]
    async fn documents_are_served_as_pdf() {
        let Some(engine) = engine() else { return };
        let response = app(Some(engine))
            .oneshot(post_json(
                "/api/v1/documents/ugovor",
                &CaseRecord::sample(),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"UGOVOR_O_RADU.pdf\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
