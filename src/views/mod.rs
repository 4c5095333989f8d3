pub mod app;
pub mod auth;
pub mod dashboard;
pub mod legal;
pub mod shared;

pub use app::render_app;
