use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password and store the session.
    Login(AuthLoginArgs),
    /// Clear the stored token and user id.
    Logout,
    /// Show the current session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "AVA_PASSWORD", hide_env_values = true)]
    pub password: String,
}
