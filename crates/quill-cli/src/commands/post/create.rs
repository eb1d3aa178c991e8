use quill_core::entities::NewPost;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    content: Option<&str>,
    category: Option<&str>,
    summary: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let post = build(title, content, category, summary)?;
    let post = ctx.service.create_post(&post).await?;
    output(&post, flags.format)
}

/// Assign fields in declaration order so the first rejected field is reported.
fn build(
    title: &str,
    content: Option<&str>,
    category: Option<&str>,
    summary: Option<&str>,
) -> anyhow::Result<NewPost> {
    let mut post = NewPost::new(title)?;
    if let Some(content) = content {
        post = post.with_content(content)?;
    }
    if let Some(category) = category {
        post = post.with_category(category)?;
    }
    if let Some(summary) = summary {
        post = post.with_summary(summary)?;
    }
    Ok(post)
}
