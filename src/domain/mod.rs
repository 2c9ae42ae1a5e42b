//! Example domain model: articles, comments and their repository seam.

use thiserror::Error;

mod article;
mod comment;
mod repository;

pub use article::Article;
pub use comment::Comment;
pub use repository::ArticleRepository;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("comment {comment_id} already exists on article {article_id}")]
    DuplicateComment { article_id: u64, comment_id: u64 },
}
