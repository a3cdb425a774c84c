// Slot Calendar Library
// Grouping, resizing and view-window logic for appointment grids

pub mod models;
pub mod services;
pub mod utils;
