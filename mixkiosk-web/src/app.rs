use crate::pages::admin::AdminPage;
use crate::pages::kiosk::KioskPage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Admin access is a session unlock: granted by the PIN gate, lost on reload.
    let admin_unlocked = use_state(|| false);

    let on_admin_unlocked = {
        let admin_unlocked = admin_unlocked.clone();
        Callback::from(move |()| admin_unlocked.set(true))
    };

    let render = {
        let admin_unlocked = admin_unlocked.clone();
        move |route: Route| match route {
            Route::Kiosk => html! {
                <KioskPage on_admin_unlocked={on_admin_unlocked.clone()} />
            },
            Route::Admin => html! {
                <AdminPage unlocked={*admin_unlocked} />
            },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}
