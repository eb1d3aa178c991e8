use serde::Serialize;
use quill_core::entities::Author;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::list_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthorListResponse {
    authors: Vec<Author>,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let authors = ctx
        .service
        .list_authors(list_limit(limit, ctx, flags))
        .await?;
    output(&AuthorListResponse { authors }, flags.format)
}
