use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicFormUseCase, CreateTopicUseCase, DeleteTopicUseCase, EditTopicFormUseCase,
    ListTopicsUseCase, ShowTopicUseCase, UpdateTopicUseCase, UploadTopicImageUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub show: Arc<dyn ShowTopicUseCase + Send + Sync>,
    pub create_form: Arc<dyn CreateTopicFormUseCase + Send + Sync>,
    pub edit_form: Arc<dyn EditTopicFormUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadTopicImageUseCase + Send + Sync>,
}
