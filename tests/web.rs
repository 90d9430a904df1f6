//! Integration tests for the REST API: status mapping, CORS header and response shape.

use actix_web::{dev::ServiceResponse, http::StatusCode, test, web::Data, App};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tourney_allocator::web::{allow_origin_headers, routes, AppState, SharedCatalog};
use tourney_allocator::{CatalogError, InMemoryCatalog, SortField, Team, TeamCatalog, TeamId};

const ORIGIN: &str = "https://tourneys.example";

/// 40 teams `t0..t39`, ratings 3.0 to 6.9.
fn catalog() -> SharedCatalog {
    let teams = (0..40)
        .map(|i| Team::new(format!("t{i}"), format!("Team {i}"), "league", 3.0 + i as f64 / 10.0))
        .collect();
    Arc::new(InMemoryCatalog::new(teams).unwrap())
}

struct UnavailableCatalog;

impl TeamCatalog for UnavailableCatalog {
    fn search_teams(
        &self,
        _min_rating: f64,
        _leagues: &[String],
        _sort: SortField,
        _limit: usize,
    ) -> Result<Vec<Team>, CatalogError> {
        Err(CatalogError::Lookup("teams service unavailable".to_string()))
    }

    fn teams_by_id(&self, _ids: &[TeamId]) -> Result<Vec<Team>, CatalogError> {
        Err(CatalogError::Lookup("teams service unavailable".to_string()))
    }
}

fn eight_groups_of_four() -> Value {
    serde_json::json!({
        "groups_count": 8,
        "teams_per_group": 4,
        "leagues": [],
        "users": [
            { "user_id": "u1", "teams_count": 8, "required_teams": ["t0"] },
            { "user_id": "u2", "teams_count": 6 },
            { "user_id": "u3", "teams_count": 8, "required_teams": ["t1", "t2"] },
            { "user_id": "u4", "teams_count": 10, "required_teams": ["t3"] }
        ]
    })
}

macro_rules! app {
    ($catalog:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new(AppState::new($catalog, 3.0)))
                .wrap(allow_origin_headers(ORIGIN))
                .configure(routes),
        )
        .await
    };
}

fn allow_origin<B>(resp: &ServiceResponse<B>) -> Option<&str> {
    resp.headers()
        .get("Access-Control-Allow-Origin")
        .and_then(|v| v.to_str().ok())
}

#[actix_web::test]
async fn generates_one_materialized_tourney() {
    let app = app!(catalog());
    let req = test::TestRequest::post()
        .uri("/tourneys")
        .set_json(eight_groups_of_four())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp), Some(ORIGIN));

    let body: Value = test::read_body_json(resp).await;
    let tourneys = body.as_array().unwrap();
    assert_eq!(tourneys.len(), 1);
    let tourney = &tourneys[0];
    assert_eq!(tourney["groups_count"], 8);
    assert_eq!(tourney["teams_per_group"], 4);
    assert!(tourney["id"].is_string());

    let groups = tourney["groups"].as_array().unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e", "f", "g", "h"]);

    let mut seen = HashSet::new();
    let mut owner_of = HashMap::new();
    for group in groups {
        let slots = group["team_slots"].as_array().unwrap();
        assert_eq!(slots.len(), 4);
        for slot in slots {
            let team_id = slot["team"]["id"].as_str().unwrap();
            assert!(seen.insert(team_id), "{team_id} used twice");
            assert!(slot["team"]["name"].is_string());
            owner_of.insert(team_id, slot["user_id"].as_str().unwrap());
        }
    }
    assert_eq!(seen.len(), 32);
    assert_eq!(owner_of["t0"], "u1");
    assert_eq!(owner_of["t1"], "u3");
    assert_eq!(owner_of["t2"], "u3");
    assert_eq!(owner_of["t3"], "u4");
}

#[actix_web::test]
async fn malformed_body_is_bad_request() {
    let app = app!(catalog());
    let req = test::TestRequest::post()
        .uri("/tourneys")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(allow_origin(&resp), Some(ORIGIN));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "bad tourney request payload" }));
}

#[actix_web::test]
async fn allocation_error_is_bad_request() {
    let app = app!(catalog());
    let mut request = eight_groups_of_four();
    request["groups_count"] = 0.into();
    let req = test::TestRequest::post()
        .uri("/tourneys")
        .set_json(request)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(allow_origin(&resp), Some(ORIGIN));
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn too_few_teams_is_bad_request() {
    let app = app!(catalog());
    let mut request = eight_groups_of_four();
    request["groups_count"] = 11.into();
    let req = test::TestRequest::post()
        .uri("/tourneys")
        .set_json(request)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn catalog_failure_is_server_error() {
    let app = app!(Arc::new(UnavailableCatalog));
    let req = test::TestRequest::post()
        .uri("/tourneys")
        .set_json(eight_groups_of_four())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(allow_origin(&resp), Some(ORIGIN));
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}

#[actix_web::test]
async fn health_check_carries_cors_header() {
    let app = app!(catalog());
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp), Some(ORIGIN));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
}
