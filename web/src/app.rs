use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::*;
use crate::shared::UserContextProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <UserContextProvider>
                <div id="app">
                    <Switch<Route> render={switch}/>
                </div>
            </UserContextProvider>
        </BrowserRouter>
    }
}
