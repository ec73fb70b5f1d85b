//! Shared test fixtures for the cypress-configuration workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`] builder for on-disk Cypress project layouts

pub mod project;

pub use project::TestProject;
