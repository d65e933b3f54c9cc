//! Core library components.
//!
//! The access model (catalog, membership and grant indices), the resolver
//! that merges them, and the read-only projections built on top.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod domain;
pub mod grants;
pub mod graph;
pub mod hierarchy;
pub mod keyfile;
pub mod membership;
pub mod resolver;
pub mod scan;
pub mod types;
pub mod views;
