//! Asset commands

use crate::bulk::AssetOps;
use crate::cli::CommandContext;
use crate::cli::args::{DeleteArgs, GlobalOptions, SelectionArgs};
use crate::cli::handlers::{run_delete, run_list};
use crate::cli::site::delete_settings;
use crate::error::Result;
use crate::models::AssetDisplay;

/// Run the asset list command
pub async fn list(opts: &GlobalOptions, selection: &SelectionArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = AssetOps::new(&client);

    run_list::<_, AssetDisplay>(
        &ops,
        &selection.to_selection()?,
        &[],
        ctx.page_size(),
        ctx.format,
    )
    .await
}

/// Run the asset delete command
pub async fn delete(
    opts: &GlobalOptions,
    selection: &SelectionArgs,
    args: &DeleteArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = AssetOps::new(&client);

    run_delete(&ops, &selection.to_selection()?, args, delete_settings(&ctx, args)).await
}
