pub mod debug_ui;
pub mod nav_lights;
