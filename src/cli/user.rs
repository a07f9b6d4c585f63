//! User commands
//!
//! Besides the shared selectors, user listings filter on account state.
//! These predicates run over an already fetched collection, so combining
//! them never costs extra requests.

use crate::bulk::{Predicate, UserOps};
use crate::cli::CommandContext;
use crate::cli::args::{DeleteArgs, GlobalOptions, SelectionArgs, UserFilterArgs};
use crate::cli::handlers::{run_delete, run_list};
use crate::cli::site::delete_settings;
use crate::client::models::User;
use crate::error::Result;
use crate::models::UserDisplay;

/// Exact login match, ignoring case
pub fn login_is(login: &str) -> Predicate<'static, User> {
    let login = login.to_lowercase();
    Box::new(move |user: &User| user.login.to_lowercase() == login)
}

pub fn enabled_is(enabled: bool) -> Predicate<'static, User> {
    Box::new(move |user: &User| user.enabled == enabled)
}

pub fn locked_is(locked: bool) -> Predicate<'static, User> {
    Box::new(move |user: &User| user.locked == locked)
}

/// Role ID match, ignoring case
pub fn role_is(role: &str) -> Predicate<'static, User> {
    let role = role.to_lowercase();
    Box::new(move |user: &User| user.role.id.to_lowercase() == role)
}

/// Predicates for the given user filter flags
pub fn user_predicates(args: &UserFilterArgs) -> Vec<Predicate<'static, User>> {
    let mut predicates = Vec::new();
    if let Some(login) = &args.login {
        predicates.push(login_is(login));
    }
    if let Some(enabled) = args.enabled {
        predicates.push(enabled_is(enabled));
    }
    if let Some(locked) = args.locked {
        predicates.push(locked_is(locked));
    }
    if let Some(role) = &args.role {
        predicates.push(role_is(role));
    }
    predicates
}

/// Run the user list command
pub async fn list(
    opts: &GlobalOptions,
    selection: &SelectionArgs,
    filters: &UserFilterArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = UserOps::new(&client);

    run_list::<_, UserDisplay>(
        &ops,
        &selection.to_selection()?,
        &user_predicates(filters),
        ctx.page_size(),
        ctx.format,
    )
    .await
}

/// Run the user delete command
pub async fn delete(
    opts: &GlobalOptions,
    selection: &SelectionArgs,
    args: &DeleteArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;
    let ops = UserOps::new(&client);

    run_delete(&ops, &selection.to_selection()?, args, delete_settings(&ctx, args)).await
}
