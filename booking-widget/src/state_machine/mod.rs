pub(crate) mod actions;
pub(crate) mod availability;
pub(crate) mod call;
pub(crate) mod identity;
pub(crate) mod input;
pub(crate) mod selection;
pub(crate) mod submission;
pub(crate) mod tabs;
pub(crate) mod token;
