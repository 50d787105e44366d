use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::subcommands::{AuthCommands, ClassCommands, CourseCommands};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Courses and their content trees.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Classes, their assessment summaries and ranked trails.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Ranking of a class.
    Ranking(RankingArgs),
    /// The general dashboard for the logged-in user.
    Dashboard(DashboardArgs),
    /// Submit a response to a task: a comment plus any number of files.
    Submit(SubmitArgs),
    /// Resolve the landing route for a role, or check a page path.
    Route(RouteArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RankingArgs {
    /// Class id.
    pub class_id: i64,
    /// Restrict to these knowledge trails (repeatable).
    #[arg(long = "trail")]
    pub trails: Vec<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Read the administrator totals instead of the learner task buckets.
    #[arg(long)]
    pub admin: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Id of the learner-to-task link being answered.
    #[arg(long)]
    pub task_user: i64,
    /// Commentary sent with the response.
    #[arg(long, default_value = "")]
    pub comment: String,
    /// Files to attach, uploaded in the given order.
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Role name (ADMIN, TEACHER, USER). Defaults to the stored session's role.
    pub role: Option<String>,
    /// Resolve the not-found fallback instead of the post-login landing page.
    #[arg(long)]
    pub not_found: bool,
    /// Run the page guard for this path against the current session.
    #[arg(long, conflicts_with = "role")]
    pub path: Option<String>,
}
