use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Deserialize;
use simscan_engine::{DocId, ScanDocument, ScanMode, ScanOptions, SimilarityEngine};
use std::sync::Arc;

#[derive(Deserialize)]
struct CompareRequest {
    source: String,
    target: String,
    #[serde(default)]
    mode: ScanMode,
}

#[derive(Deserialize)]
struct ScanRequest {
    source: String,
    documents: Vec<ScanDocument>,
    #[serde(default)]
    mode: ScanMode,
    threshold: Option<f32>,
    source_id: Option<DocId>,
}

#[derive(Deserialize)]
struct TopicsRequest {
    text: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<SimilarityEngine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/health", web::get().to(health))
                .route("/compare", web::post().to(compare))
                .route("/scan", web::post().to(scan))
                .route("/topics", web::post().to(topics))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(engine: web::Data<Arc<SimilarityEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "judge": engine.judge_model(),
    })))
}

async fn compare(
    engine: web::Data<Arc<SimilarityEngine>>,
    req: web::Json<CompareRequest>,
) -> ActixResult<HttpResponse> {
    match req.mode {
        ScanMode::Basic => {
            let score = engine.compare_basic(&req.source, &req.target);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "score": score
            })))
        }
        ScanMode::Full => {
            let report = engine.compare(&req.source, &req.target).await;
            Ok(HttpResponse::Ok().json(report))
        }
    }
}

async fn scan(
    engine: web::Data<Arc<SimilarityEngine>>,
    req: web::Json<ScanRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let mut options = ScanOptions {
        mode: req.mode,
        source_id: req.source_id,
        ..Default::default()
    };
    if let Some(threshold) = req.threshold {
        options.threshold = threshold;
    }

    let outcome = engine.scan(&req.source, &req.documents, &options).await;
    Ok(HttpResponse::Ok().json(outcome))
}

async fn topics(
    engine: web::Data<Arc<SimilarityEngine>>,
    req: web::Json<TopicsRequest>,
) -> ActixResult<HttpResponse> {
    let report = engine.topics(&req.text).await;
    Ok(HttpResponse::Ok().json(report))
}
