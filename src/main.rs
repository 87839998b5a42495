pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, category, topic};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::category::adapter::outgoing::CategoryQueryPostgres;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::topic::adapter::incoming::web::routes;
use crate::topic::adapter::outgoing::{
    ImageUploadConfig, LocalImageUploader, TopicQueryPostgres, TopicRepositoryPostgres,
};
use crate::topic::application::domain::policies::AuthorTopicPolicy;
use crate::topic::application::services::{
    CreateTopicFormService, CreateTopicService, DeleteTopicService, EditTopicFormService,
    ListTopicsService, ShowTopicService, UpdateTopicService, UploadTopicImageService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

fn required_env(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| io::Error::other(format!("{key} is not set")))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let jwt_config = JwtConfig::from_env().map_err(io::Error::other)?;
    let upload_config = ImageUploadConfig::from_env();

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        info!("Running pending migrations");
        Migrator::up(&conn, None).await.map_err(io::Error::other)?;
    }

    let db_arc = Arc::new(conn);

    // Adapters
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let uploader = LocalImageUploader::new(upload_config);
    let policy = AuthorTopicPolicy;

    let topic = TopicUseCases {
        list: Arc::new(ListTopicsService::new(topic_query.clone())),
        show: Arc::new(ShowTopicService::new(topic_query.clone())),
        create_form: Arc::new(CreateTopicFormService::new(category_query.clone())),
        edit_form: Arc::new(EditTopicFormService::new(
            topic_query.clone(),
            category_query.clone(),
            policy,
        )),
        create: Arc::new(CreateTopicService::new(
            topic_repo.clone(),
            category_query.clone(),
        )),
        update: Arc::new(UpdateTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
            category_query,
            policy,
        )),
        delete: Arc::new(DeleteTopicService::new(topic_query, topic_repo, policy)),
        upload_image: Arc::new(UploadTopicImageService::new(uploader)),
    };

    let state = AppState { topic };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(routes::topic_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Topics: literal segments before the `{topic_id}` routes
    cfg.service(routes::create_topic_form_handler);
    cfg.service(routes::upload_topic_image_handler);
    cfg.service(routes::list_topics_handler);
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::show_topic_handler);
    cfg.service(routes::edit_topic_form_handler);
    cfg.service(routes::update_topic_handler);
    cfg.service(routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
