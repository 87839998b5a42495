pub mod image_uploader;
pub mod topic_query;
pub mod topic_repository;

pub use image_uploader::{ImageUploadError, ImageUploader, StoredImage, UploadedImage};
pub use topic_query::{PageRequest, PageResult, TopicOrder, TopicQuery, TopicQueryError, TopicView};
pub use topic_repository::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData,
};
