//! LifePlan Coach - service entry point.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifeplan_coach::adapters::ai::{AnthropicConfig, AnthropicProvider};
use lifeplan_coach::adapters::http::{api_router, ApiState};
use lifeplan_coach::adapters::mongo::{
    MongoPlanRepository, MongoProfileRepository, MongoQuestionnaireRepository, MongoStore,
};
use lifeplan_coach::application::handlers::{
    CreateProfileHandler, GeneratePlanHandler, GetPlanHandler, SubmitQuestionnaireHandler,
};
use lifeplan_coach::config::AppConfig;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  LifePlan AI - Productivity Coaching");
    info!("======================================");
    info!("Listen: {}", config.server.socket_addr());
    info!("Environment: {:?}", config.server.environment);
    info!("MongoDB: {}", config.database.url);
    info!("Database: {}", config.database.name);
    info!("======================================");

    // Connect to the document store (opened once, shared by all requests)
    let store = match MongoStore::connect(&config.database.url, &config.database.name).await {
        Ok(store) => store,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    // Wire adapters
    let questionnaires = Arc::new(MongoQuestionnaireRepository::new(&store));
    let profiles = Arc::new(MongoProfileRepository::new(&store));
    let plans = Arc::new(MongoPlanRepository::new(&store));

    let ai_config = AnthropicConfig::new(config.ai.api_key().unwrap_or_default())
        .with_timeout(config.ai.timeout());
    let ai = Arc::new(AnthropicProvider::new(ai_config));

    // Wire application handlers
    let state = ApiState::new(
        Arc::new(SubmitQuestionnaireHandler::new(questionnaires.clone())),
        Arc::new(CreateProfileHandler::new(
            questionnaires.clone(),
            profiles.clone(),
        )),
        Arc::new(GeneratePlanHandler::new(
            profiles,
            questionnaires,
            plans.clone(),
            ai,
        )),
        Arc::new(GetPlanHandler::new(plans)),
    );

    let app = api_router(state, &config.server);
    let addr = config.server.socket_addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
