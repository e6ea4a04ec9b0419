//! Command implementations for the Artifetch CLI

pub mod completions;
pub mod helpers;
pub mod plan;
pub mod repos;
pub mod version;
