pub mod auth;
pub mod class;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod ranking;
pub mod route;
pub mod submit;
