use std::process::ExitCode;

use clap::crate_name;
use clap::crate_version;
use clap::Parser;
use time::format_description::well_known::Rfc3339;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::Level;

pub mod posts;
pub mod ranking;
pub mod render;
pub mod visibility;

use posts::Post;
use visibility::Visibility;

#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// List posts that are still marked as drafts.
    #[arg(long)]
    include_drafts: bool,

    /// Publication cut-off as an RFC 3339 timestamp. Defaults to the current time.
    #[arg(long, value_parser = parse_now)]
    now: Option<OffsetDateTime>,

    /// Posts scheduled at most this many minutes ahead are published early.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i64).range(0..=MAX_MARGIN_MINUTES))]
    scheduled_margin_minutes: i64,

    /// Render a single post by slug instead of the index.
    #[arg(long)]
    post: Option<String>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// Largest margin that still fits in a `Duration`.
const MAX_MARGIN_MINUTES: i64 = i64::MAX / 60;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Rank(#[from] ranking::RankError),
    #[error("no published post with slug {0:?}")]
    PostNotFound(String),
}

fn parse_now(raw: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|e| e.to_string())
}

macro_rules! banner_format { () => { "        \
        _   ,_,   _\n       \
       / `'=) (='` \\\n      \
      /.-.-.\\ /.-.-.\\\n      \
      `      \"      `\n\
{}: {}\n\
args: {:?}" }; }

fn run(args: &Cli) -> Result<String, CliError> {
    let visibility = Visibility {
        now: args.now.unwrap_or_else(OffsetDateTime::now_utc),
        scheduled_margin: Duration::minutes(args.scheduled_margin_minutes),
        include_drafts: args.include_drafts,
    };

    let all = posts::all();
    let ranked = ranking::rank(&all, |post: &Post| visibility.is_visible(post))?;
    tracing::info!(total = all.len(), published = ranked.len(), "ranked posts");

    let html = match &args.post {
        Some(slug) => match ranked.iter().find(|post| &post.slug() == slug) {
            Some(post) => render::render_post(post)?,
            None => return Err(CliError::PostNotFound(slug.clone())),
        },
        None => render::render_index(&ranked)?,
    };
    Ok(html)
}

fn main() -> ExitCode {
    let args = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();
    eprintln!(banner_format!(), crate_name!(), crate_version!(), args);

    match run(&args) {
        Ok(html) => {
            println!("{}", html);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to build the post listing");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn cli_at(now: &str, extra: &[&str]) -> Cli {
        let mut argv = vec!["ranked-blog", "--now", now];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    fn cli(extra: &[&str]) -> Cli {
        cli_at("2024-01-01T00:00:00Z", extra)
    }

    #[test]
    fn test_index_lists_newest_first_without_drafts() {
        let html = run(&cli(&[])).unwrap();
        let recency = html.find("/posts/ranking-by-recency").unwrap();
        let binary = html.find("/posts/a-binary-blog").unwrap();
        assert!(recency < binary);
        assert!(!html.contains("/posts/scheduled-posts"));
    }

    #[test]
    fn test_include_drafts_puts_latest_draft_first() {
        let html = run(&cli(&["--include-drafts"])).unwrap();
        let draft = html.find("/posts/scheduled-posts").unwrap();
        let recency = html.find("/posts/ranking-by-recency").unwrap();
        assert!(draft < recency);
    }

    #[test]
    fn test_early_cutoff_hides_future_posts() {
        let html = run(&cli_at("2023-03-20T00:00:00Z", &[])).unwrap();
        assert!(html.contains("/posts/ranking-by-recency"));
        assert!(!html.contains("/posts/a-binary-blog"));
    }

    #[test]
    fn test_single_post() {
        let html = run(&cli(&["--post", "a-binary-blog"])).unwrap();
        assert!(html.contains("<article>"));
    }

    #[test_case("scheduled-posts" ; "draft")]
    #[test_case("missing" ; "unknown")]
    fn test_single_post_not_published(slug: &str) {
        match run(&cli(&["--post", slug])) {
            Err(CliError::PostNotFound(missing)) => assert_eq!(missing, slug),
            other => panic!("expected PostNotFound, got {:?}", other),
        }
    }

    #[test_case("9999-12-31T23:59:59Z", "15" ; "now at the end of time")]
    #[test_case("2024-01-01T00:00:00Z", "200000000000" ; "huge margin")]
    fn test_extreme_cutoff_lists_all_published(now: &str, margin: &str) {
        let html = run(&cli_at(now, &["--scheduled-margin-minutes", margin])).unwrap();
        assert!(html.contains("/posts/ranking-by-recency"));
        assert!(html.contains("/posts/a-binary-blog"));
        assert!(!html.contains("/posts/scheduled-posts"));
    }

    #[test_case("-1" ; "negative")]
    #[test_case("153722867280912931" ; "overflows duration")]
    fn test_rejects_out_of_range_margin(margin: &str) {
        let args = ["ranked-blog", "--scheduled-margin-minutes", margin];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_rejects_bad_now() {
        assert!(Cli::try_parse_from(["ranked-blog", "--now", "tomorrow"]).is_err());
    }
}
