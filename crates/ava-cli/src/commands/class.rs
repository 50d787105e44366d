use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ava class <subcommand>`.
pub async fn handle(
    action: &ClassCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClassCommands::List => {
            let classes = ctx.client.list_classes(&ctx.call).await?;
            output(&classes, flags.format)
        }
        ClassCommands::Summary { id } => {
            let summary = ctx.client.class_summary(&ctx.call, *id).await?;
            output(&summary, flags.format)
        }
        ClassCommands::Trails { id } => {
            let trails = ctx.client.class_ranked_trails(&ctx.call, *id).await?;
            output(&trails, flags.format)
        }
    }
}
