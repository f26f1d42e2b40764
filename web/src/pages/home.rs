use yew::prelude::*;

use crate::hooks::use_user_context;
use crate::shared::{RequireUser, WelcomePanel};

#[function_component(Home)]
pub fn home() -> Html {
    let user_ctx = use_user_context();
    let username = AttrValue::from(user_ctx.username().unwrap_or_default().to_owned());

    // Stable across renders so a new username doesn't rewire the panel.
    let on_logout = {
        let user_ctx = user_ctx.clone();
        use_callback(move |_, _| user_ctx.logout(), ())
    };

    html! {
        <RequireUser>
            <div id="home">
                <WelcomePanel {username} {on_logout} />
            </div>
        </RequireUser>
    }
}
