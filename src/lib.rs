pub mod api;
pub mod config;
pub mod stats;
pub mod status;
pub mod view;
pub mod visual_report;
pub mod week_grid;
