mod home;
mod login;
mod logout;

pub use home::Home;
pub use login::Login;
pub use logout::Logout;
