// Library crate: the page model, runner and suites. main.rs drives it and
// integration tests exercise it.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod jenkins;
pub mod locator;
pub mod ordering;
pub mod pages;
pub mod runner;
pub mod settings;
pub mod suites;
