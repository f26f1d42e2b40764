use std::fmt;
use std::ops::Deref;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::types::UserInfo;

#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum UserContext {
    #[default]
    Anonymous,
    User(UserInfo),
}

impl UserContext {
    pub fn username(&self) -> Option<&str> {
        match self {
            UserContext::User(user) => Some(&user.username),
            UserContext::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, UserContext::User(_))
    }
}

/// State handle for the [`use_user_context`] hook.
pub struct UseUserContextHandle {
    inner: UseStateHandle<UserContext>,
    navigator: Navigator,
}

impl UseUserContextHandle {
    pub fn login(&self, value: UserInfo) {
        log::info!("user-context: login {}", value.username);
        self.inner.set(UserContext::User(value));
        self.navigator.push(&Route::Home);
    }

    pub fn logout(&self) {
        log::info!("user-context: logout");
        self.inner.set(UserContext::Anonymous);
        self.navigator.push(&Route::Login);
    }
}

impl Deref for UseUserContextHandle {
    type Target = UserContext;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Clone for UseUserContextHandle {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl PartialEq for UseUserContextHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl fmt::Debug for UseUserContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseUserContextHandle")
            .field("value", &format!("{:?}", *self.inner))
            .finish()
    }
}

/// This hook is used to manage user context.
#[hook]
pub fn use_user_context() -> UseUserContextHandle {
    let inner = use_context::<UseStateHandle<UserContext>>()
        .expect("use_user_context requires a UserContextProvider");
    let navigator = use_navigator().expect("use_user_context requires a router");

    UseUserContextHandle { inner, navigator }
}
