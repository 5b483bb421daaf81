//! Provider implementations

pub mod error_utils;
mod google;

pub use google::GeminiProvider;
