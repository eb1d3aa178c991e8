use anyhow::Context;
use quill_db::updates::author::AuthorUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    name: Option<String>,
    phone: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none() && phone.is_none() {
        anyhow::bail!("At least one of --name or --phone must be provided");
    }

    let mut builder = AuthorUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(phone) = phone {
        builder = builder.phone_number(phone);
    }

    let author = ctx
        .service
        .update_author(id, builder.build())
        .await
        .with_context(|| format!("author {id}"))?;
    output(&author, flags.format)
}
