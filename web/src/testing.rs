//! Hosts pages the way `App` does, but over an in-memory history so tests
//! pick the starting route and session.

use yew::prelude::*;
use yew_router::history::AnyHistory;
use yew_router::prelude::*;
use yew_router::Router;

use crate::hooks::UserContext;
use crate::routes::{switch, Route};
use crate::shared::UserContextProvider;
use crate::types::UserInfo;

#[derive(Properties, Clone, PartialEq)]
pub struct HostProps {
    pub history: AnyHistory,
    #[prop_or_default]
    pub session: UserContext,
}

#[function_component(Host)]
pub fn host(props: &HostProps) -> Html {
    html! {
        <Router history={props.history.clone()}>
            <UserContextProvider initial={props.session.clone()}>
                <Switch<Route> render={switch}/>
            </UserContextProvider>
        </Router>
    }
}

pub fn history_at(route: Route) -> AnyHistory {
    AnyHistory::from(yew_router::history::MemoryHistory::with_entries(vec![
        route.to_path(),
    ]))
}

pub fn signed_in(username: &str) -> UserContext {
    UserContext::User(UserInfo {
        username: username.into(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn render_at(route: Route, session: UserContext) -> String {
    yew::ServerRenderer::<Host>::with_props(move || HostProps {
        history: history_at(route),
        session,
    })
    .hydratable(false)
    .render()
    .await
}

#[cfg(target_arch = "wasm32")]
pub mod browser {
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};
    use yew::platform::time::sleep;
    use yew::prelude::*;

    pub fn mount<C>(props: C::Properties) -> Element
    where
        C: BaseComponent,
    {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
        root
    }

    /// Lets renders, effects and navigation run to completion.
    pub async fn settle() {
        for _ in 0..4 {
            sleep(Duration::from_millis(5)).await;
        }
    }

    pub fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).unwrap()
    }

    pub fn text(root: &Element, selector: &str) -> String {
        find(root, selector)
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .text_content()
            .unwrap_or_default()
    }

    pub fn click(root: &Element, selector: &str) {
        find(root, selector)
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    pub fn type_into(root: &Element, selector: &str, value: &str) {
        let input = find(root, selector)
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        input.set_value(value);

        let mut init = EventInit::new();
        init.bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }
}
