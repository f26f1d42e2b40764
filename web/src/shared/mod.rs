mod list_errors;
mod require_user;
mod user_context_provider;
mod welcome_panel;

pub use list_errors::ListErrors;
pub use require_user::RequireUser;
pub use user_context_provider::UserContextProvider;
pub use welcome_panel::{greeting, Props as WelcomePanelProps, WelcomePanel};
