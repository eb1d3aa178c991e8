use quill_core::entities::NewAuthor;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    phone: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut author = NewAuthor::new(name)?;
    if let Some(phone) = phone {
        author = author.with_phone_number(phone)?;
    }

    let author = ctx.service.create_author(&author).await?;
    output(&author, flags.format)
}
