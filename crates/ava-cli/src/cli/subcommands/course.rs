use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses.
    List,
    /// Show a course's sections, trails, tasks and contents.
    Summary {
        /// Course id.
        id: i64,
    },
}
