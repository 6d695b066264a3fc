use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{html as cmark_html, Options, Parser as CmarkParser};
use time::UtcOffset;

use crate::posts::Post;
use crate::ranking::{effective_timestamp, parse_timestamp, RankError};

/// UTC calendar date of the timestamp a post is ranked by.
fn display_date(post: &Post) -> Result<String, RankError> {
    let instant = parse_timestamp(effective_timestamp(post))?;
    Ok(instant.to_offset(UtcOffset::UTC).date().to_string())
}

/// Lists posts in the order given.
pub(crate) fn render_index(posts: &[&Post]) -> Result<String, RankError> {
    let mut entries: Vec<(String, &Post)> = Vec::with_capacity(posts.len());
    for post in posts {
        entries.push((display_date(post)?, *post));
    }
    let markup: Markup = html! {
        ul.posts {
            @for (date, post) in &entries {
                li {
                    a href={ "/posts/" (post.slug()) } { (post.title) }
                    " "
                    time datetime=(date) { (date) }
                    @if post.draft { " " em { "draft" } }
                    p { (post.description) }
                }
            }
        }
    };
    Ok(markup.into_string())
}

pub(crate) fn render_post(post: &Post) -> Result<String, RankError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = CmarkParser::new_ext(post.raw_markdown, options);

    let mut body = String::new();
    cmark_html::push_html(&mut body, parser);

    let date = display_date(post)?;
    let markup = html! {
        article {
            h1 { (post.title) }
            time datetime=(date) { (date) }
            (PreEscaped(body))
        }
    };
    Ok(markup.into_string())
}
