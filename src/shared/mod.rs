pub mod cards;
pub mod text;
pub mod types;
pub mod ui;
