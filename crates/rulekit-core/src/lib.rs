pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod io;
pub mod manifest;
pub mod matcher;
pub mod paths;
pub mod registry;
pub mod report;
pub mod technology;

pub use error::{Result, RulekitError};
