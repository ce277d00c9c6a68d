// News service - Publishing and removing staff announcements
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::FleetRepository;
use crate::application::ids::short_id;
use crate::domain::news::{NewsDraft, NewsPost, PostCounts};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct NewsBoard {
    pub counts: PostCounts,
    pub posts: Vec<NewsPost>,
}

#[derive(Clone)]
pub struct NewsService {
    repository: Arc<dyn FleetRepository>,
}

impl NewsService {
    pub fn new(repository: Arc<dyn FleetRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> ServiceResult<NewsBoard> {
        let posts = self.repository.list_news().await?;
        let counts = PostCounts::from_posts(&posts);
        Ok(NewsBoard { counts, posts })
    }

    pub async fn publish(&self, draft: NewsDraft) -> ServiceResult<NewsPost> {
        let date = match (draft.missing_fields(), draft.date) {
            (missing, Some(date)) if missing.is_empty() => date,
            (missing, _) => return Err(ServiceError::MissingFields(missing)),
        };

        let post = draft.publish(short_id(), date);
        self.repository.insert_news(post.clone()).await?;
        tracing::info!("Announcement published successfully: {} [{}]", post.title, post.category);
        Ok(post)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<NewsPost> {
        let post = self
            .repository
            .remove_news(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("post", id))?;
        tracing::info!("Post {} deleted", id);
        Ok(post)
    }
}
