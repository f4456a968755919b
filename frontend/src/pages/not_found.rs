use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page" style="display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; min-height: 100vh; background: #0a0a0a; color: #fff;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Landing}>
                {"Back to PIYX AI"}
            </Link<Route>>
        </div>
    }
}
