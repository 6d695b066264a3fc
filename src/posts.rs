use convert_case::{Case, Casing};

use crate::ranking::Timestamped;

#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Post {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) created_time: &'static str,
    pub(crate) last_edited_time: Option<&'static str>,
    pub(crate) draft: bool,
    pub(crate) raw_markdown: &'static str,
}

impl Post {
    pub(crate) fn slug(&self) -> String {
        self.title.to_case(Case::Kebab)
    }
}

impl Timestamped for Post {
    fn created_time(&self) -> &str {
        self.created_time
    }

    fn last_edited_time(&self) -> Option<&str> {
        self.last_edited_time
    }
}

pub mod _0001_a_binary_blog;
pub mod _0002_ranking_by_recency;
pub mod _0003_scheduled_posts;

/// Every compiled-in post, in declaration order.
pub(crate) fn all() -> Vec<Post> {
    vec![
        _0001_a_binary_blog::build(),
        _0002_ranking_by_recency::build(),
        _0003_scheduled_posts::build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::sort_key;

    #[test]
    fn test_slugs_are_unique_and_kebab() {
        let slugs: Vec<String> = all().iter().map(Post::slug).collect();
        assert_eq!(slugs[0], "a-binary-blog");
        let mut deduped = slugs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), slugs.len());
    }

    #[test]
    fn test_all_posts_have_valid_timestamps() {
        for post in all() {
            assert!(sort_key(&post).is_ok(), "{} has a bad timestamp", post.title);
        }
    }
}
