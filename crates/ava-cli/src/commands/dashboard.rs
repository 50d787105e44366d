use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.admin {
        let dashboard = ctx.client.admin_general_dashboard(&ctx.call).await?;
        output(&dashboard, flags.format)
    } else {
        let dashboard = ctx.client.user_general_dashboard(&ctx.call).await?;
        output(&dashboard, flags.format)
    }
}
