//! # ava-gateway
//!
//! Authenticated REST gateway to the AVA learning platform backend.
//!
//! Every endpoint is an independent async method on [`ApiClient`] that takes
//! an explicit [`ava_auth::CallContext`]:
//! - the context picks the base URL (internal address for server execution,
//!   public origin for browser execution) and where the bearer credential
//!   comes from (request cookie or local session store)
//! - each call is sent exactly once; there is no caching, retry or
//!   de-duplication
//! - failures map to a fixed user-facing message per status, overridden by
//!   the backend's own `message` when it sends one
//! - in browser execution failures are also pushed to the [`Notifier`]
//!
//! Endpoints by resource:
//! - session: login
//! - users, courses, classes, knowledge trails
//! - tasks, task contents, task-user links
//! - learner responses, feedback, rankings, dashboards
//! - [`ApiClient::submit_task_response`]: the multi-step submission flow

pub mod attachment;
pub mod classes;
pub mod client;
pub mod courses;
pub mod dashboard;
pub mod feedback;
pub mod knowledge_trails;
pub mod notify;
pub mod ranking;
pub mod responses;
pub mod session;
pub mod submission;
pub mod task_contents;
pub mod task_users;
pub mod tasks;
pub mod users;

mod error;
mod http;

pub use attachment::{Attachment, infer_content_type};
pub use client::{ApiClient, Auth, Download};
pub use error::{ErrorKind, GatewayError};
pub use http::status_message;
pub use notify::{MemoryNotifier, NoopNotifier, Notifier};
pub use submission::{SubmissionError, SubmissionReceipt, SubmissionStage, TaskSubmission};
