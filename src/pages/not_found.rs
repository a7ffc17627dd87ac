use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="text-align: center; padding: 8rem 2rem;">
            <h1>{"Page not found"}</h1>
            <p>{"There's nothing here, but there's plenty on the front page."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to Echo"}
            </Link<Route>>
        </div>
    }
}
