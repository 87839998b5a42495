pub mod image_uploader_local;
pub mod sea_orm_entity;
mod topic_query_postgres;
mod topic_repository_postgres;

pub use image_uploader_local::{ImageUploadConfig, LocalImageUploader};
pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
