pub mod menu;
pub mod screen;

pub use menu::*;
pub use screen::*;
