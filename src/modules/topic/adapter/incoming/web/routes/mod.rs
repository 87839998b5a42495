pub mod create_topic;
pub mod create_topic_form;
pub mod delete_topic;
pub mod edit_topic_form;
pub mod list_topics;
pub mod show_topic;
mod topic_request;
pub mod update_topic;
pub mod upload_image;

pub use create_topic::create_topic_handler;
pub use create_topic_form::create_topic_form_handler;
pub use delete_topic::delete_topic_handler;
pub use edit_topic_form::edit_topic_form_handler;
pub use list_topics::{list_topics_handler, ListTopicsQuery};
pub use show_topic::show_topic_handler;
pub use topic_request::{topic_path_config, TopicRequest};
pub use update_topic::update_topic_handler;
pub use upload_image::{upload_topic_image_handler, UploadImageForm};
