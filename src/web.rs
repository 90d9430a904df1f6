//! REST API: tournament generation and health check.

use crate::catalog::TeamCatalog;
use crate::logic::{Materializer, TourneyGenerator};
use crate::models::{AllocationError, GenerateTourneyRequest};
use actix_web::{
    error::InternalError,
    get,
    http::StatusCode,
    middleware::DefaultHeaders,
    post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Catalog shared by every worker.
pub type SharedCatalog = Arc<dyn TeamCatalog + Send + Sync>;

/// Shared, read-only state: one catalog behind both the generator and the materializer.
pub struct AppState {
    generator: TourneyGenerator<SharedCatalog>,
    materializer: Materializer<SharedCatalog>,
}

impl AppState {
    pub fn new(catalog: SharedCatalog, min_rating: f64) -> Self {
        Self {
            generator: TourneyGenerator::new(Arc::clone(&catalog)).with_min_rating(min_rating),
            materializer: Materializer::new(catalog),
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tourney-allocator",
    })
}

/// Catalog failures are server-side; everything else is a bad request.
pub fn allocation_error_status(e: &AllocationError) -> StatusCode {
    match e {
        AllocationError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Generate one tournament and return it (with full team records) as a one-element array.
#[post("/tourneys")]
async fn api_generate_tourney(
    state: Data<AppState>,
    body: Json<GenerateTourneyRequest>,
) -> HttpResponse {
    let requirements = body.requirements();
    let mut rng = StdRng::from_entropy();
    let tourney = match state.generator.generate(
        body.groups_count,
        body.teams_per_group,
        &body.leagues,
        &requirements,
        &mut rng,
    ) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("tourney generation error: {}", e);
            return HttpResponse::build(allocation_error_status(&e))
                .json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    match state.materializer.materialize(std::slice::from_ref(&tourney)) {
        Ok(views) => {
            log::info!(
                "Generated tourney {} ({} groups of {})",
                tourney.id(),
                tourney.group_count(),
                tourney.group_size()
            );
            HttpResponse::Ok().json(views)
        }
        Err(e) => {
            log::error!("converting tourney entity to response error: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Malformed bodies answer 400 `{"error": "bad tourney request payload"}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("tourney request payload error: {}", err);
        let response = HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "bad tourney request payload" }));
        InternalError::from_response(err, response).into()
    })
}

/// `Access-Control-Allow-Origin` on every response. `origin` must be a valid header value.
pub fn allow_origin_headers(origin: &str) -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", origin.to_owned()))
}

/// Register the API routes and the JSON body config.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(api_health)
        .service(api_generate_tourney);
}
