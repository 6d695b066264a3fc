use crate::posts::Post;

pub(crate) fn build() -> Post {
    Post {
        title: "Scheduled posts",
        description: "Drafts and future dated posts stay off the index.",
        created_time: "2023-06-10T07:00:00+02:00",
        last_edited_time: None,
        draft: true,
        raw_markdown: r#"
A post is hidden while it is marked as a draft, or while its created time is
still in the future.

Run with `--include-drafts` to preview this one.
"#,
    }
}
