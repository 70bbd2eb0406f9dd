mod map_controller;

pub use map_controller::MapController;
