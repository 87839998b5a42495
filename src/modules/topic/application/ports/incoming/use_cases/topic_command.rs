use std::collections::BTreeMap;

//
// ──────────────────────────────────────────────────────────
// Topic Command
// ──────────────────────────────────────────────────────────
//

pub const TITLE_MAX_CHARS: usize = 255;

/// Validated topic input. Only these fields can ever be written from a request.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicCommand {
    title: String,
    body: String,
    category_id: i64,
}

/// Every field that failed validation, with its messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid topic input")]
pub struct TopicCommandError {
    pub fields: BTreeMap<&'static str, Vec<String>>,
}

impl TopicCommandError {
    fn push(&mut self, field: &'static str, message: &str) {
        self.fields
            .entry(field)
            .or_default()
            .push(message.to_string());
    }
}

impl TopicCommand {
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Self, TopicCommandError> {
        let mut errors = TopicCommandError {
            fields: BTreeMap::new(),
        };

        let title = title.as_deref().map(str::trim).unwrap_or_default();
        let title_chars = title.chars().count();
        if title.is_empty() {
            errors.push("title", "标题不能为空");
        } else if title_chars > TITLE_MAX_CHARS {
            errors.push("title", "标题不能超过 255 个字符");
        }

        let body = body.as_deref().map(str::trim).unwrap_or_default();
        if body.is_empty() {
            errors.push("body", "文章内容不能为空");
        }

        let category_id = match category_id {
            Some(id) if id > 0 => id,
            _ => {
                errors.push("category_id", "请选择分类");
                0
            }
        };

        if !errors.fields.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            category_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn valid_input_is_trimmed() {
        let cmd = TopicCommand::new(some("  Rust 入门  "), some(" 正文内容 "), Some(2)).unwrap();

        assert_eq!(cmd.title(), "Rust 入门");
        assert_eq!(cmd.body(), "正文内容");
        assert_eq!(cmd.category_id(), 2);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = TopicCommand::new(None, None, None).unwrap_err();

        assert_eq!(err.fields["title"], vec!["标题不能为空"]);
        assert_eq!(err.fields["body"], vec!["文章内容不能为空"]);
        assert_eq!(err.fields["category_id"], vec!["请选择分类"]);
    }

    #[test]
    fn single_character_title_and_body_are_accepted() {
        let cmd = TopicCommand::new(some("T"), some("B"), Some(1)).unwrap();

        assert_eq!(cmd.title(), "T");
        assert_eq!(cmd.body(), "B");
        assert_eq!(cmd.category_id(), 1);
    }

    #[test]
    fn title_length_counts_characters() {
        assert!(TopicCommand::new(some(&"话".repeat(255)), some("body"), Some(1)).is_ok());

        let err = TopicCommand::new(some(&"a".repeat(256)), some("body"), Some(1)).unwrap_err();
        assert_eq!(err.fields["title"], vec!["标题不能超过 255 个字符"]);
    }

    #[test]
    fn non_positive_category_is_rejected() {
        let err = TopicCommand::new(some("Title"), some("body"), Some(0)).unwrap_err();

        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields["category_id"], vec!["请选择分类"]);
    }

    #[test]
    fn whitespace_only_title_counts_as_empty() {
        let err = TopicCommand::new(some("   "), some("body"), Some(1)).unwrap_err();

        assert_eq!(err.fields["title"], vec!["标题不能为空"]);
    }
}
