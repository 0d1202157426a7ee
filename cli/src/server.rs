use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;

use fitrec_core::health::health_report;
use fitrec_core::models::{
    HealthInput, HealthReport, MealNeighbor, WorkoutPick, normalize_difficulty,
};
use fitrec_core::registry::ArtifactRegistry;

const BODY_LIMIT: usize = 1024 * 1024; // 1 MB

/// Gender choices offered to form clients.
const GENDERS: [&str; 2] = ["Male", "Female"];

/// Exercise-type choices offered to form clients.
const PHYSICAL_EXERCISES: [&str; 6] = ["Cardio", "Strength", "Yoga", "HIIT", "Stretching", "Other"];

#[derive(Clone)]
struct AppState {
    registry: Arc<ArtifactRegistry>,
}

// --- Request / Response types ---

fn default_count() -> usize {
    5
}

#[derive(Deserialize)]
struct WorkoutRequest {
    difficulty: String,
    muscle_group: Option<String>,
    #[serde(default = "default_count")]
    n: usize,
}

#[derive(Deserialize)]
struct MealRequest {
    meal_name: String,
    #[serde(default = "default_count")]
    top_n: usize,
}

#[derive(Deserialize)]
struct HealthRequest {
    age: u32,
    gender: String,
    bmi: f64,
    fat_percentage: f64,
    workout_frequency: f64,
    physical_exercise: String,
    water_intake: f64,
    daily_meals: f64,
}

#[derive(Serialize)]
struct OptionsResponse {
    genders: Vec<String>,
    physical_exercises: Vec<String>,
    difficulty_levels: Vec<String>,
    target_muscle_groups: Vec<String>,
    meal_names: Vec<String>,
    meal_types: Vec<String>,
    diet_types: Vec<String>,
    cooking_methods: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// --- Error handling ---

enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unavailable(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unavailable(err) => {
                eprintln!("Recommender unavailable: {err:#}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Recommender unavailable".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

// --- Middleware ---

async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static("default-src 'none'"),
    );
    response
}

// --- Handlers ---

async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let mut options = OptionsResponse {
        genders: GENDERS.iter().map(ToString::to_string).collect(),
        physical_exercises: PHYSICAL_EXERCISES.iter().map(ToString::to_string).collect(),
        difficulty_levels: Vec::new(),
        target_muscle_groups: Vec::new(),
        meal_names: Vec::new(),
        meal_types: Vec::new(),
        diet_types: Vec::new(),
        cooking_methods: Vec::new(),
    };

    // Missing catalogs degrade to empty dropdowns, matching the form
    // behavior rather than failing the whole page.
    if let Ok(rec) = state.registry.workout() {
        options.difficulty_levels = rec.catalog().difficulties();
        options.target_muscle_groups = rec.catalog().muscle_groups();
    }
    if let Ok(rec) = state.registry.meal() {
        options.meal_names = rec.catalog().meal_names();
        options.meal_types = rec.catalog().meal_types();
        options.diet_types = rec.catalog().diet_types();
        options.cooking_methods = rec.catalog().cooking_methods();
    }

    Json(options)
}

async fn recommend_workout(
    State(state): State<AppState>,
    Json(req): Json<WorkoutRequest>,
) -> Result<Json<Vec<WorkoutPick>>, ApiError> {
    if req.difficulty.trim().is_empty() {
        return Err(ApiError::BadRequest("difficulty is required".to_string()));
    }

    let recommender = state.registry.workout().map_err(ApiError::Unavailable)?;
    let difficulty = normalize_difficulty(&req.difficulty);
    let picks = recommender.recommend(&difficulty, req.muscle_group.as_deref(), req.n);
    Ok(Json(picks))
}

async fn recommend_health(
    Json(req): Json<HealthRequest>,
) -> Json<HealthReport> {
    let input = HealthInput {
        age: req.age,
        gender: req.gender,
        bmi: req.bmi,
        fat_percentage: req.fat_percentage,
        workout_frequency: req.workout_frequency,
        physical_exercise: req.physical_exercise,
        water_intake: req.water_intake,
        daily_meals: req.daily_meals,
    };
    Json(health_report(&input))
}

async fn recommend_meal(
    State(state): State<AppState>,
    Json(req): Json<MealRequest>,
) -> Result<Json<Vec<MealNeighbor>>, ApiError> {
    if req.meal_name.trim().is_empty() {
        return Err(ApiError::BadRequest("meal_name is required".to_string()));
    }
    if req.top_n == 0 {
        return Err(ApiError::BadRequest("top_n must be at least 1".to_string()));
    }

    let recommender = state.registry.meal().map_err(ApiError::Unavailable)?;
    let neighbors = recommender
        .recommend(&req.meal_name, req.top_n)
        .map_err(|not_found| ApiError::NotFound(not_found.to_string()))?;
    Ok(Json(neighbors))
}

// --- Router builder ---

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/options", get(get_options))
        .route("/api/recommend/workout", post(recommend_workout))
        .route("/api/recommend/health", post(recommend_health))
        .route("/api/recommend/meal", post(recommend_meal))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

// --- Server startup ---

pub async fn start_server(
    registry: Arc<ArtifactRegistry>,
    port: u16,
    bind: &str,
) -> anyhow::Result<()> {
    let state = AppState {
        registry: Arc::clone(&registry),
    };

    // Warm the caches up front so missing artifacts are visible at startup
    // instead of on the first request.
    if let Err(err) = registry.workout() {
        eprintln!("Warning: workout recommender unavailable: {err:#}");
    }
    if let Err(err) = registry.meal() {
        eprintln!("Warning: meal recommender unavailable: {err:#}");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    eprintln!("Listening on http://{bind}:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
