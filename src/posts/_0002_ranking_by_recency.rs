use crate::posts::Post;

pub(crate) fn build() -> Post {
    Post {
        title: "Ranking by recency",
        description: "Edited posts float back to the top of the index.",
        created_time: "2023-03-15T09:30:00Z",
        last_edited_time: Some("2023-05-02T18:45:12.250Z"),
        draft: false,
        raw_markdown: r#"
The index is ordered by the last time a post was touched:

| Post state | Sort key |
|------------|----------|
| never edited | created time |
| edited | last edited time |

Both are compared in whole seconds.
"#,
    }
}
