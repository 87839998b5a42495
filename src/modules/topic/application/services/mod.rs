pub mod create_topic_form_service;
pub mod create_topic_service;
pub mod delete_topic_service;
pub mod edit_topic_form_service;
pub mod list_topics_service;
pub mod show_topic_service;
pub mod update_topic_service;
pub mod upload_topic_image_service;

pub use create_topic_form_service::CreateTopicFormService;
pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use edit_topic_form_service::EditTopicFormService;
pub use list_topics_service::ListTopicsService;
pub use show_topic_service::ShowTopicService;
pub use update_topic_service::UpdateTopicService;
pub use upload_topic_image_service::UploadTopicImageService;
