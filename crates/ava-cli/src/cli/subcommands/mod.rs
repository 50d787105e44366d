pub mod auth;
pub mod class;
pub mod course;

pub use auth::AuthCommands;
pub use class::ClassCommands;
pub use course::CourseCommands;
