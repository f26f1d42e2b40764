use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{hooks::use_user_context, routes::Route};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(RequireUser)]
pub fn require_user(props: &Props) -> Html {
    let navigator = use_navigator().expect("RequireUser requires a router");
    let user_ctx = use_user_context();
    let authenticated = user_ctx.is_authenticated();

    use_effect_with_deps(
        move |authenticated| {
            if !*authenticated {
                log::info!("require-user: anonymous, redirecting");
                navigator.push(&Route::Login);
            }
            || ()
        },
        authenticated,
    );

    if authenticated {
        html! { for props.children.iter() }
    } else {
        html! {}
    }
}
