// News domain model - Announcements published to staff
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PUBLISHING_AUTHOR: &str = "Terminal Master";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub date: NaiveDate,
    pub status: PostStatus,
    pub author: String,
    pub has_image: bool,
}

/// Post totals shown above the news feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostCounts {
    pub published: usize,
    pub drafts: usize,
}

impl PostCounts {
    pub fn from_posts(posts: &[NewsPost]) -> Self {
        posts.iter().fold(Self::default(), |mut counts, post| {
            match post.status {
                PostStatus::Published => counts.published += 1,
                PostStatus::Draft => counts.drafts += 1,
            }
            counts
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub has_image: bool,
}

impl NewsDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }

    /// Build the published post. Callers check `missing_fields` first.
    pub fn publish(self, id: String, date: NaiveDate) -> NewsPost {
        NewsPost {
            id,
            title: self.title.trim().to_string(),
            body: self.body,
            category: self.category.trim().to_string(),
            date,
            status: PostStatus::Published,
            author: PUBLISHING_AUTHOR.to_string(),
            has_image: self.has_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_requires_title_category_date() {
        let draft = NewsDraft {
            body: "Fare matrix changes take effect Monday".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.missing_fields(), vec!["title", "category", "date"]);
    }

    #[test]
    fn test_publish_sets_author_and_status() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let draft = NewsDraft {
            title: " Holy Week Schedule ".to_string(),
            category: "Operations".to_string(),
            date: Some(date),
            ..Default::default()
        };
        assert!(draft.missing_fields().is_empty());

        let post = draft.publish("abc123xyz".to_string(), date);
        assert_eq!(post.title, "Holy Week Schedule");
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.author, PUBLISHING_AUTHOR);
        assert!(!post.has_image);
    }
}
