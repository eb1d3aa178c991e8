use anyhow::Context;
use quill_db::updates::post::PostUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateArgs {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
}

pub async fn run(
    id: i64,
    args: UpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.title.is_none()
        && args.content.is_none()
        && args.category.is_none()
        && args.summary.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --content, --category, or --summary must be provided"
        );
    }

    let mut builder = PostUpdateBuilder::new();
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    if let Some(content) = args.content {
        builder = builder.content(content);
    }
    if let Some(category) = args.category {
        builder = builder.category(category);
    }
    if let Some(summary) = args.summary {
        builder = builder.summary(summary);
    }

    let post = ctx
        .service
        .update_post(id, builder.build())
        .await
        .with_context(|| format!("post {id}"))?;
    output(&post, flags.format)
}
