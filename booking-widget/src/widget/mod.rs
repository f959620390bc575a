pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod runner;
