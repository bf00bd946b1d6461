use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agricola_tutor_engine::{
    CardFragment, CardSource, CardView, FileSource, HttpSource, Locale, TutorEngine,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<TutorEngine>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
    #[serde(default)]
    lang: Option<String>,
}

fn default_max_results() -> usize {
    10
}

#[derive(Debug, Deserialize)]
struct CardRequest {
    #[serde(default)]
    numbering: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    results: Vec<CardView>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    cards: usize,
    rated_cards: usize,
    loaded_at: String,
}

fn request_locale(lang: &Option<String>) -> Locale {
    lang.as_deref().map(Locale::from_tag).unwrap_or(Locale::En)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_server=debug,agricola_tutor_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cards_path = std::env::var("CARDS_PATH").unwrap_or_else(|_| "cards.json".to_string());
    let cards_url = std::env::var("CARDS_URL").ok();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Agricola Tutor Engine Server");
    tracing::info!("🔌 Port: {}", port);

    let source: Box<dyn CardSource> = match cards_url {
        Some(url) => {
            tracing::info!("📦 Dataset: {}", url);
            Box::new(HttpSource::new(url))
        }
        None => {
            tracing::info!("📦 Dataset: {}", cards_path);
            Box::new(FileSource::new(cards_path))
        }
    };

    let engine = TutorEngine::load(source.as_ref()).await?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/card", post(card_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎲 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: agricola_tutor_engine::VERSION.to_string(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    tracing::debug!("Search request: {:?}", req);

    let locale = request_locale(&req.lang);
    let results = state.engine.search_views(&req.query, req.max_results, locale);

    tracing::info!("✅ '{}' → {} results", req.query, results.len());

    Json(SearchResponse { results })
}

async fn card_handler(
    State(state): State<AppState>,
    Json(req): Json<CardRequest>,
) -> Result<Json<CardView>, AppError> {
    let fragment = CardFragment {
        numbering: req.numbering.clone(),
        name: req.name.clone(),
    };
    let locale = request_locale(&req.lang);

    match state.engine.lookup(&fragment, locale) {
        Some(view) => {
            tracing::info!("✅ {:?} → {}", fragment, view.id);
            Ok(Json(view))
        }
        None => Err(AppError::NotFound(fragment)),
    }
}

async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.engine.stats();

    Json(StatsResponse {
        cards: stats.cards,
        rated_cards: stats.rated_cards,
        loaded_at: stats.loaded_at.to_rfc3339(),
    })
}

// Error handling
enum AppError {
    NotFound(CardFragment),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(fragment) => (
                StatusCode::NOT_FOUND,
                format!("No card matches fragment {:?}", fragment),
            ),
        };

        tracing::debug!("Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
