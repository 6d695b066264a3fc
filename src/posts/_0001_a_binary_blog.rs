use crate::posts::Post;

pub(crate) fn build() -> Post {
    Post {
        title: "A binary blog",
        description: "Why the posts on this site are compiled into the binary.",
        created_time: "2023-04-01T00:00:00Z",
        last_edited_time: None,
        draft: false,
        raw_markdown: r#"
Every post here lives in a Rust module and is compiled straight into the binary.

No database, no content directory to ship alongside it. Just **markdown** in a string.

~~Deploying~~ Copying one file is the whole release process.
"#,
    }
}
