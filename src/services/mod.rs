// Service module exports

pub mod availability;
pub mod date_window;
pub mod grouping;
pub mod interaction;
pub mod settings;
pub mod slot_store;
pub mod view_controller;
