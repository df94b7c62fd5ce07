mod app;
pub(crate) mod effects;
mod input;
mod ui;

pub use app::run_app;
