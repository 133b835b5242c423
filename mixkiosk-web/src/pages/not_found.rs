use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h1>{ "Seite nicht gefunden" }</h1>
            <Link<Route> classes="save-btn" to={Route::Kiosk}>
                { "Zurück zum Cocktailmixer" }
            </Link<Route>>
        </main>
    }
}
