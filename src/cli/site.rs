//! Site commands

use crate::bulk::SiteOps;
use crate::cli::CommandContext;
use crate::cli::args::{DeleteArgs, GlobalOptions, SelectionArgs};
use crate::cli::handlers::{DeleteSettings, run_delete, run_list};
use crate::error::Result;
use crate::models::SiteDisplay;

/// Run the site list command
pub async fn list(opts: &GlobalOptions, selection: &SelectionArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = SiteOps::new(&client);

    run_list::<_, SiteDisplay>(
        &ops,
        &selection.to_selection()?,
        &[],
        ctx.page_size(),
        ctx.format,
    )
    .await
}

/// Run the site delete command
pub async fn delete(
    opts: &GlobalOptions,
    selection: &SelectionArgs,
    args: &DeleteArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = SiteOps::new(&client);

    run_delete(&ops, &selection.to_selection()?, args, delete_settings(&ctx, args)).await
}

/// Resolve delete settings from context and flags
pub(crate) fn delete_settings(ctx: &CommandContext, args: &DeleteArgs) -> DeleteSettings {
    DeleteSettings {
        format: ctx.format,
        page_size: ctx.page_size(),
        prompt: !args.yes && ctx.config.preferences.confirm_destructive,
    }
}
