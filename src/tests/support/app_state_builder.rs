use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::tests::support::topic_fixtures::sample_page;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicFormUseCase, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, EditTopicFormError, EditTopicFormUseCase, ListTopicsUseCase,
    ShowTopicUseCase, UpdateTopicError, UpdateTopicUseCase, UploadTopicImageUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless overridden.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                list: Arc::new(StubListTopicsUseCase::success(sample_page(vec![], 1))),
                show: Arc::new(StubShowTopicUseCase::not_found()),
                create_form: Arc::new(StubCreateTopicFormUseCase::with_categories(vec![])),
                edit_form: Arc::new(StubEditTopicFormUseCase::failing(
                    EditTopicFormError::NotFound,
                )),
                create: Arc::new(StubCreateTopicUseCase::failing(
                    CreateTopicError::RepositoryError("not configured".to_string()),
                )),
                update: Arc::new(StubUpdateTopicUseCase::failing(UpdateTopicError::NotFound)),
                delete: Arc::new(StubDeleteTopicUseCase::failing(DeleteTopicError::NotFound)),
                upload_image: Arc::new(StubUploadTopicImageUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_show_topic(mut self, uc: impl ShowTopicUseCase + 'static) -> Self {
        self.topic.show = Arc::new(uc);
        self
    }

    pub fn with_create_topic_form(mut self, uc: impl CreateTopicFormUseCase + 'static) -> Self {
        self.topic.create_form = Arc::new(uc);
        self
    }

    pub fn with_edit_topic_form(mut self, uc: impl EditTopicFormUseCase + 'static) -> Self {
        self.topic.edit_form = Arc::new(uc);
        self
    }

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_update_topic(mut self, uc: impl UpdateTopicUseCase + 'static) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + 'static) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_upload_topic_image(mut self, uc: impl UploadTopicImageUseCase + 'static) -> Self {
        self.topic.upload_image = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
