//! Core pipeline orchestration and domain logic for the megalist generator.
//!
//! This crate ties together catalog loading, noise filtering, category
//! grouping, Markdown rendering, and output writing into one `generate` run.

pub mod assembler;
pub mod classifier;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod toc;
