//! Validated post and comment input
//!
//! Title and category are stored trimmed. Content keeps its whitespace but
//! must contain something besides it. An empty image string means no image.

use crate::error::{BlogError, BlogResult};

const CREATE_REQUIRED: &str = "Title, content, and category are required";
const COMMENT_REQUIRED: &str = "Comment content required";

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn normalize_image(image: Option<String>) -> Option<String> {
    image
        .as_deref()
        .and_then(non_blank)
        .map(str::to_string)
}

/// Fields for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
}

impl PostDraft {
    pub fn new(
        title: &str,
        content: String,
        category: &str,
        image: Option<String>,
    ) -> BlogResult<Self> {
        let (Some(title), Some(_), Some(category)) =
            (non_blank(title), non_blank(&content), non_blank(category))
        else {
            return Err(BlogError::Validation(CREATE_REQUIRED.to_string()));
        };

        Ok(Self {
            title: title.to_string(),
            category: category.to_string(),
            content,
            image: normalize_image(image),
        })
    }
}

/// Partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    /// `Some(None)` clears the image
    pub image: Option<Option<String>>,
}

impl PostPatch {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
        image: Option<String>,
    ) -> BlogResult<Self> {
        let title = title
            .map(|t| required_field(&t, "Title").map(str::to_string))
            .transpose()?;
        let category = category
            .map(|c| required_field(&c, "Category").map(str::to_string))
            .transpose()?;
        let content = match content {
            Some(c) => {
                required_field(&c, "Content")?;
                Some(c)
            }
            None => None,
        };

        Ok(Self {
            title,
            content,
            category,
            image: image.map(|i| normalize_image(Some(i))),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

fn required_field<'a>(value: &'a str, name: &str) -> BlogResult<&'a str> {
    non_blank(value).ok_or_else(|| BlogError::Validation(format!("{} cannot be empty", name)))
}

/// Comment text, non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(content: String) -> BlogResult<Self> {
        if non_blank(&content).is_none() {
            return Err(BlogError::Validation(COMMENT_REQUIRED.to_string()));
        }
        Ok(Self(content))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_title_and_category() {
        let draft = PostDraft::new("  T ", "C".into(), " cat ", Some("   ".into())).unwrap();
        assert_eq!(draft.title, "T");
        assert_eq!(draft.category, "cat");
        assert_eq!(draft.content, "C");
        assert_eq!(draft.image, None);
    }

    #[test]
    fn test_draft_requires_fields() {
        for (title, content, category) in [("", "C", "cat"), ("T", "  ", "cat"), ("T", "C", "")] {
            let err = PostDraft::new(title, content.into(), category, None).unwrap_err();
            assert_eq!(err.to_string(), CREATE_REQUIRED);
        }
    }

    #[test]
    fn test_patch_rejects_blank_provided_fields() {
        let err = PostPatch::new(Some(" ".into()), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert!(PostPatch::new(None, Some("".into()), None, None).is_err());
        assert!(PostPatch::new(None, None, Some("".into()), None).is_err());
    }

    #[test]
    fn test_patch_image_clear() {
        let patch = PostPatch::new(None, None, None, Some(String::new())).unwrap();
        assert_eq!(patch.image, Some(None));
        assert!(!patch.is_empty());
        assert!(PostPatch::default().is_empty());
    }

    #[test]
    fn test_comment_body() {
        assert!(CommentBody::new("nice".into()).is_ok());
        assert_eq!(
            CommentBody::new("  ".into()).unwrap_err().to_string(),
            COMMENT_REQUIRED
        );
    }
}
