pub mod config;
pub mod tree;
pub mod validation;
