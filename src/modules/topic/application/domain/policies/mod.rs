pub mod topic_policy;

pub use topic_policy::{AuthorTopicPolicy, TopicAbility, TopicPolicy};
