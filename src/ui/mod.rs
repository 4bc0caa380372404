pub mod app;
pub mod components;
pub mod state;

pub use app::NexusApp;
