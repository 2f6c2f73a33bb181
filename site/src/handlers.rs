use crate::chain_client::ChainError;
use crate::pages::{self, ContactOutcome, DemoStatus};
use crate::state::AppState;
use actix_cors::Cors;
use actix_web::{HttpResponse, web};
use blocktree_core::{ChainSnapshot, ContactForm, build_tree};
use chrono::Utc;
use log::{error, info};
use maud::Markup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    cfg.route("/", web::get().to(home))
        .route("/about", web::get().to(about))
        .route("/features", web::get().to(features))
        .route("/use-cases", web::get().to(use_cases))
        .service(
            web::resource("/contact")
                .route(web::get().to(contact_form))
                .route(web::post().to(contact_submit)),
        )
        .route("/demo", web::get().to(demo))
        .route("/demo/mine", web::post().to(demo_mine))
        .route("/demo/reset", web::post().to(demo_reset))
        .service(
            web::scope("/api")
                .wrap(cors)
                .route("/health", web::get().to(health))
                .route("/chain", web::get().to(get_chain))
                .route("/tree", web::get().to(get_tree))
                .route("/chain/mine", web::post().to(api_mine))
                .route("/chain/reset", web::post().to(api_reset)),
        );
}

async fn home() -> Markup {
    pages::home_page()
}

async fn about() -> Markup {
    pages::about_page()
}

async fn features() -> Markup {
    pages::features_page()
}

async fn use_cases() -> Markup {
    pages::use_cases_page()
}

async fn contact_form() -> Markup {
    pages::contact_page(&ContactForm::default(), None)
}

async fn contact_submit(state: web::Data<AppState>, form: web::Form<ContactForm>) -> Markup {
    let form = form.into_inner();

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(e) => {
            info!("Rejected contact submission: {}", e);
            return pages::contact_page(&form, Some(&ContactOutcome::Error(e.to_string())));
        }
    };

    match state.relay.deliver(&submission).await {
        Ok(()) => pages::contact_page(&ContactForm::default(), Some(&ContactOutcome::Success)),
        Err(e) => {
            error!("Failed to relay contact submission: {}", e);
            let outcome = ContactOutcome::Error(pages::DELIVERY_FAILED_MESSAGE.to_string());
            pages::contact_page(&form, Some(&outcome))
        }
    }
}

fn render_demo(snapshot: &ChainSnapshot, status: DemoStatus) -> Markup {
    pages::demo_page(snapshot, &build_tree(snapshot), status)
}

async fn demo(state: web::Data<AppState>) -> Markup {
    let snapshot = state.chain.load_or_empty().await;
    render_demo(&snapshot, DemoStatus::Idle)
}

/// Render the result of a trigger, or the current chain with an error status.
async fn demo_after(
    state: &AppState,
    result: Result<ChainSnapshot, ChainError>,
    ok_status: DemoStatus,
) -> Markup {
    match result {
        Ok(snapshot) => render_demo(&snapshot, ok_status),
        Err(e) => {
            error!("Chain trigger ({}) failed: {}", ok_status.label(), e);
            let snapshot = state.chain.load_or_empty().await;
            render_demo(&snapshot, DemoStatus::Error)
        }
    }
}

async fn demo_mine(state: web::Data<AppState>) -> Markup {
    let result = state.chain.mine().await;
    demo_after(&state, result, DemoStatus::Mined).await
}

async fn demo_reset(state: web::Data<AppState>) -> Markup {
    let result = state.chain.reset().await;
    demo_after(&state, result, DemoStatus::Reset).await
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn get_chain(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.chain.load_or_empty().await)
}

async fn get_tree(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.chain.load_or_empty().await;
    HttpResponse::Ok().json(build_tree(&snapshot))
}

fn trigger_response(result: Result<ChainSnapshot, ChainError>) -> HttpResponse {
    match result {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            error!("Chain trigger failed: {}", e);
            HttpResponse::BadGateway().json(serde_json::json!({
                "status": "error",
                "error": e.to_string(),
            }))
        }
    }
}

async fn api_mine(state: web::Data<AppState>) -> HttpResponse {
    trigger_response(state.chain.mine().await)
}

async fn api_reset(state: web::Data<AppState>) -> HttpResponse {
    trigger_response(state.chain.reset().await)
}
