use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// List classes.
    List,
    /// Assessment summary of a class.
    Summary {
        /// Class id.
        id: i64,
    },
    /// Knowledge trails of a class that have a ranking.
    Trails {
        /// Class id.
        id: i64,
    },
}
