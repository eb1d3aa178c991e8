use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Compute effective limit with precedence: local arg -> global flag -> config default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// [`effective_limit`] with the configured `[general] default_limit` as fallback.
#[must_use]
pub fn list_limit(local: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> u32 {
    effective_limit(local, flags.limit, ctx.config.general.default_limit)
}
