pub mod event;
pub mod harness;
pub mod page;
