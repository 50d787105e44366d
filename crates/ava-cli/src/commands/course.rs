use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ava course <subcommand>`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List => {
            let courses = ctx.client.list_courses(&ctx.call).await?;
            output(&courses, flags.format)
        }
        CourseCommands::Summary { id } => {
            let summary = ctx.client.course_content_summary(&ctx.call, *id).await?;
            output(&summary, flags.format)
        }
    }
}
