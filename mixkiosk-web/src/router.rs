use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Kiosk,
    #[at("/admin")]
    Admin,
    #[at("/404")]
    #[not_found]
    NotFound,
}
