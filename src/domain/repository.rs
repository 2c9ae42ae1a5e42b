use super::Article;

/// Interacts with [`Article`] values held in a persistence layer.
///
/// No implementation ships with this crate; a consumer supplies one backed
/// by whatever store it uses.
pub trait ArticleRepository {
    /// Finds an article by its ID, if one exists.
    fn find_by_id(&self, id: u64) -> Option<Article>;

    /// Finds all existing articles.
    fn find_all(&self) -> Vec<Article>;

    /// Saves an article: an upsert keyed on the article ID.
    fn save(&mut self, article: Article) -> Article;

    /// Deletes the article with the supplied ID. Deleting an unknown ID is
    /// a no-op; afterwards no article with that ID exists either way.
    fn delete_by_id(&mut self, id: u64);
}
