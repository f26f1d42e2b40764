//! User context provider.

use yew::prelude::*;

use crate::hooks::UserContext;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub initial: UserContext,
    pub children: Children,
}

/// Sessions start anonymous and only live as long as the page does.
#[function_component(UserContextProvider)]
pub fn user_context_provider(props: &Props) -> Html {
    let initial = props.initial.clone();
    let user_ctx = use_state(move || initial);

    html! {
        <ContextProvider<UseStateHandle<UserContext>> context={user_ctx}>
            { for props.children.iter() }
        </ContextProvider<UseStateHandle<UserContext>>>
    }
}
