pub mod app;
pub mod input;
pub mod render;
pub mod theme;
pub mod toasts;

pub use app::run;
