//! Command implementations for the nativedeps CLI

pub mod platforms;
pub mod provision;
pub mod resolve;
pub mod version;
