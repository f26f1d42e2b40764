pub mod app;
pub mod errors;
pub mod hooks;
pub mod pages;
pub mod routes;
pub mod shared;
pub mod types;

#[cfg(test)]
mod testing;

pub use app::App;
pub use shared::WelcomePanel;
