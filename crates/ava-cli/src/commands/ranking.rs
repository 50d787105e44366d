use crate::cli::GlobalFlags;
use crate::cli::root_commands::RankingArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &RankingArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ranking = ctx
        .client
        .ranking_by_class(&ctx.call, args.class_id, &args.trails)
        .await?;
    output(&ranking, flags.format)
}
