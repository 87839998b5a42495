use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicAbility {
    Update,
    Destroy,
}

/// Decides whether an acting user may perform an ability on a topic.
pub trait TopicPolicy: Send + Sync {
    fn allows(&self, actor: &UserId, topic: &TopicView, ability: TopicAbility) -> bool;
}

/// Only the author may edit or delete their topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorTopicPolicy;

impl TopicPolicy for AuthorTopicPolicy {
    fn allows(&self, actor: &UserId, topic: &TopicView, ability: TopicAbility) -> bool {
        match ability {
            TopicAbility::Update | TopicAbility::Destroy => topic.user_id == *actor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::topic_fixtures::sample_topic_view;

    #[test]
    fn author_may_update_and_destroy() {
        let topic = sample_topic_view(1, UserId::from(7));
        let policy = AuthorTopicPolicy;

        assert!(policy.allows(&UserId::from(7), &topic, TopicAbility::Update));
        assert!(policy.allows(&UserId::from(7), &topic, TopicAbility::Destroy));
    }

    #[test]
    fn other_users_are_refused() {
        let topic = sample_topic_view(1, UserId::from(7));
        let policy = AuthorTopicPolicy;

        assert!(!policy.allows(&UserId::from(8), &topic, TopicAbility::Update));
        assert!(!policy.allows(&UserId::from(8), &topic, TopicAbility::Destroy));
    }
}
