pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod usecase;
