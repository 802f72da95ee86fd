pub mod nav_light;
pub mod ship;

pub use nav_light::*;
pub use ship::*;
