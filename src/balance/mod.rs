pub mod formatting;
pub mod view;
