//! # ava-core
//!
//! Core types shared across the AVA gateway crates.
//!
//! This crate provides:
//! - Data-transfer structs mirrored from the LMS backend (users, courses,
//!   classes, knowledge trails, tasks, responses, feedback, rankings)
//! - Enumerations with their wire spellings (`Role`, `TaskContentType`, ...)
//! - The backend response envelope and error body shapes
//! - The [`ExecutionContext`] marker that selects server or browser behaviour

pub mod context;
pub mod entities;
pub mod enums;
pub mod responses;

pub use context::ExecutionContext;
