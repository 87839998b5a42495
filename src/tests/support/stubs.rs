use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryItem;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicFormUseCase, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, EditTopicFormError, EditTopicFormUseCase, ListTopicsError,
    ListTopicsUseCase, ShowTopicError, ShowTopicUseCase, TopicCommand, TopicForm, TopicFormError,
    UpdateTopicError, UpdateTopicUseCase, UploadImageResponse, UploadTopicImageUseCase,
};
use crate::topic::application::ports::outgoing::{
    PageResult, TopicOrder, TopicResult, TopicView, UploadedImage,
};

// ============================================================
// List
// ============================================================

pub struct StubListTopicsUseCase {
    result: Result<PageResult<TopicView>, ListTopicsError>,
    pub seen: Arc<Mutex<Option<(TopicOrder, u64)>>>,
}

impl StubListTopicsUseCase {
    pub fn success(page: PageResult<TopicView>) -> Self {
        Self {
            result: Ok(page),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ListTopicsError::QueryError("db down".to_string())),
            seen: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(
        &self,
        order: TopicOrder,
        page: u64,
    ) -> Result<PageResult<TopicView>, ListTopicsError> {
        *self.seen.lock().unwrap() = Some((order, page));
        self.result.clone()
    }
}

// ============================================================
// Show
// ============================================================

pub struct StubShowTopicUseCase {
    result: Result<TopicView, ShowTopicError>,
}

impl StubShowTopicUseCase {
    pub fn found(topic: TopicView) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(ShowTopicError::NotFound),
        }
    }
}

#[async_trait]
impl ShowTopicUseCase for StubShowTopicUseCase {
    async fn execute(&self, _topic_id: i64) -> Result<TopicView, ShowTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Forms
// ============================================================

pub struct StubCreateTopicFormUseCase {
    result: Result<TopicForm, TopicFormError>,
}

impl StubCreateTopicFormUseCase {
    pub fn with_categories(categories: Vec<CategoryItem>) -> Self {
        Self {
            result: Ok(TopicForm {
                topic: None,
                categories,
            }),
        }
    }
}

#[async_trait]
impl CreateTopicFormUseCase for StubCreateTopicFormUseCase {
    async fn execute(&self) -> Result<TopicForm, TopicFormError> {
        self.result.clone()
    }
}

pub struct StubEditTopicFormUseCase {
    result: Result<TopicForm, EditTopicFormError>,
}

impl StubEditTopicFormUseCase {
    pub fn found(form: TopicForm) -> Self {
        Self { result: Ok(form) }
    }

    pub fn failing(err: EditTopicFormError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl EditTopicFormUseCase for StubEditTopicFormUseCase {
    async fn execute(
        &self,
        _actor: UserId,
        _topic_id: i64,
    ) -> Result<TopicForm, EditTopicFormError> {
        self.result.clone()
    }
}

// ============================================================
// Create / Update / Delete
// ============================================================

pub struct StubCreateTopicUseCase {
    result: Result<TopicResult, CreateTopicError>,
    pub seen: Arc<Mutex<Option<(UserId, TopicCommand)>>>,
}

impl StubCreateTopicUseCase {
    pub fn created(topic: TopicResult) -> Self {
        Self {
            result: Ok(topic),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(err: CreateTopicError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicResult, CreateTopicError> {
        *self.seen.lock().unwrap() = Some((owner, command));
        self.result.clone()
    }
}

pub struct StubUpdateTopicUseCase {
    result: Result<TopicResult, UpdateTopicError>,
    pub seen: Arc<Mutex<Option<(UserId, i64)>>>,
}

impl StubUpdateTopicUseCase {
    pub fn updated(topic: TopicResult) -> Self {
        Self {
            result: Ok(topic),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(err: UpdateTopicError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        actor: UserId,
        topic_id: i64,
        _command: TopicCommand,
    ) -> Result<TopicResult, UpdateTopicError> {
        *self.seen.lock().unwrap() = Some((actor, topic_id));
        self.result.clone()
    }
}

pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn deleted() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing(err: DeleteTopicError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _actor: UserId, _topic_id: i64) -> Result<(), DeleteTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Upload
// ============================================================

/// Succeeds whenever a file is given and records what it received.
#[derive(Default)]
pub struct StubUploadTopicImageUseCase {
    pub seen: Arc<Mutex<Option<Option<UploadedImage>>>>,
}

#[async_trait]
impl UploadTopicImageUseCase for StubUploadTopicImageUseCase {
    async fn execute(&self, file: Option<UploadedImage>, _owner: UserId) -> UploadImageResponse {
        let response = match &file {
            Some(f) => UploadImageResponse::succeeded(format!("/uploads/{}", f.file_name)),
            None => UploadImageResponse::failed(),
        };
        *self.seen.lock().unwrap() = Some(file);
        response
    }
}
