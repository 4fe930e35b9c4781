pub mod catalog;
pub mod models;
pub mod navigator;
pub mod search;
