use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => super::auth::handle(&action, ctx, flags).await,
        Commands::Course { action } => super::course::handle(&action, ctx, flags).await,
        Commands::Class { action } => super::class::handle(&action, ctx, flags).await,
        Commands::Ranking(args) => super::ranking::handle(&args, ctx, flags).await,
        Commands::Dashboard(args) => super::dashboard::handle(&args, ctx, flags).await,
        Commands::Submit(args) => super::submit::handle(&args, ctx, flags).await,
        Commands::Route(args) => super::route::handle(&args, ctx, flags),
    }
}
