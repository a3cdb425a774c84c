// Module exports for models

pub mod availability;
pub mod color;
pub mod group;
pub mod settings;
pub mod slot;
pub mod ui;
