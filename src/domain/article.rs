use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, DomainError};

/// An article. Comments attached to an article must have unique IDs; adding
/// a comment whose ID already exists is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    comments: Vec<Comment>,
}

impl Article {
    pub fn new(
        id: u64,
        created_at: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            created_at,
            title: title.into(),
            content: content.into(),
            comments: Vec::new(),
        }
    }

    /// Creates an article with an initial set of comments, rejecting the
    /// set if it contains duplicate comment IDs.
    pub fn with_comments(
        id: u64,
        created_at: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
        comments: Vec<Comment>,
    ) -> Result<Self, DomainError> {
        let mut article = Self::new(id, created_at, title, content);
        for comment in comments {
            article.add_comment(comment)?;
        }
        Ok(article)
    }

    /// Adds a new comment. The supplied comment must have an ID distinct
    /// from every comment already attached to this article.
    pub fn add_comment(&mut self, comment: Comment) -> Result<(), DomainError> {
        if self.comments.iter().any(|existing| existing.id == comment.id) {
            return Err(DomainError::DuplicateComment {
                article_id: self.id,
                comment_id: comment.id,
            });
        }

        self.comments.push(comment);
        Ok(())
    }

    /// Finds a comment by its ID, if one exists.
    pub fn find_comment_by_id(&self, id: u64) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
