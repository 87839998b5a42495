mod create_topic;
mod create_topic_form;
mod delete_topic;
mod edit_topic_form;
mod list_topics;
mod show_topic;
mod topic_command;
mod update_topic;
mod upload_topic_image;

pub use create_topic::{CreateTopicError, CreateTopicUseCase};
pub use create_topic_form::{CreateTopicFormUseCase, TopicForm, TopicFormError};
pub use delete_topic::{DeleteTopicError, DeleteTopicUseCase};
pub use edit_topic_form::{EditTopicFormError, EditTopicFormUseCase};
pub use list_topics::{ListTopicsError, ListTopicsUseCase};
pub use show_topic::{ShowTopicError, ShowTopicUseCase};
pub use topic_command::{TopicCommand, TopicCommandError};
pub use update_topic::{UpdateTopicError, UpdateTopicUseCase};
pub use upload_topic_image::{
    UploadImageResponse, UploadTopicImageUseCase, UPLOAD_FAILED_MSG, UPLOAD_SUCCEEDED_MSG,
};
