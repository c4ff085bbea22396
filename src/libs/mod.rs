pub mod actions;
pub mod data_storage;
pub mod input;
pub mod messages;
pub mod project;
pub mod task;
pub mod tracker;
pub mod view;
