//! Terminal riverside scene: sky, mountains, houses, trees, a river and an
//! animated boat, rendered as colored half-block cells with a day/night
//! palette toggled from the keyboard.

pub mod app;
pub mod app_state;
pub mod config;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod scene;
