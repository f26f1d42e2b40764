//! Greeting for the signed-in user along with their way out.

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Shown verbatim, empty included.
    pub username: AttrValue,
    pub on_logout: Callback<()>,
}

pub fn greeting(username: &str) -> String {
    format!("Welcome, {}", username)
}

/// Drops whatever event triggered the logout, the owner only hears `()`.
fn forward_logout<E: 'static>(on_logout: &Callback<()>) -> Callback<E> {
    on_logout.reform(|_: E| {
        log::debug!("welcome: logout");
    })
}

#[function_component(WelcomePanel)]
pub fn welcome_panel(props: &Props) -> Html {
    let onclick = forward_logout::<MouseEvent>(&props.on_logout);

    html! {
        <div class="row">
            <span>{ greeting(&props.username) }</span>
            <button
                type="button"
                class="btn btn-primary ladda-button"
                data-style="expand-right"
                data-size="s"
                {onclick}>
                { "Logout" }
            </button>
        </div>
    }
}
