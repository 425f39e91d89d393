//! Domain types and validation rules shared across the portfolio crates.
//!
//! This crate is persistence- and transport-agnostic: it knows nothing about
//! BSON, HTTP, or templates. The store and api crates depend on it for the
//! entity constraints and the [`error::CoreError`] taxonomy.

pub mod contact;
pub mod error;
pub mod project;
pub mod types;
