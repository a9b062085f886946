pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod translator;
