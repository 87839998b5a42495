use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, RedirectData, RedirectResponse};
use crate::category::application::ports::outgoing::CategoryItem;
use crate::topic::adapter::incoming::web::routes::{self, TopicRequest, UploadImageForm};
use crate::topic::application::ports::incoming::use_cases::{TopicForm, UploadImageResponse};
use crate::topic::application::ports::outgoing::TopicView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Topics API",
        version = "1.0.0",
        description = "Topic listing, authoring and image upload for the forum"
    ),
    paths(
        routes::list_topics::list_topics_handler,
        routes::show_topic::show_topic_handler,
        routes::create_topic_form::create_topic_form_handler,
        routes::create_topic::create_topic_handler,
        routes::edit_topic_form::edit_topic_form_handler,
        routes::update_topic::update_topic_handler,
        routes::delete_topic::delete_topic_handler,
        routes::upload_image::upload_topic_image_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            RedirectResponse,
            RedirectData,

            // Topic DTOs
            TopicView,
            TopicForm,
            TopicRequest,
            UploadImageForm,
            UploadImageResponse,
            CategoryItem
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity service"))
                        .build(),
                ),
            )
        }
    }
}

/// Serves the generated OpenAPI document.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
