pub mod extract;
pub mod menu;
