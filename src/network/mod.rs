pub mod binding;
pub mod chain;
pub mod registry;
