#![no_std]

extern crate alloc;

pub mod format;
pub mod reservation;
