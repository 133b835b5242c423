//! Admin console: ingredient stock levels and refill actions.
//!
//! Only reachable through the PIN gate; a direct navigation without the
//! session unlock bounces back to the kiosk page.

use mixkiosk_core::catalog::{IngredientStatus, RefillOutcome};
use mixkiosk_core::prompt::{PromptConstraints, PromptError};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::components::alerts::{
    AlertHost, AlertKind, Alerts, ConfirmDialog, DEFAULT_TIMEOUT_MS, NumberPromptDialog,
    PromptRequest,
};
use crate::dom;
use crate::router::Route;

/// Level every bottle is set to by "refill all", in milliliters.
const REFILL_ALL_LEVEL_ML: f64 = 2000.0;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub unlocked: bool,
}

pub enum Msg {
    LevelsLoaded(Result<Vec<IngredientStatus>, ApiError>),
    RequestRefill(u32),
    RefillValue(Option<f64>),
    RefillInvalid(PromptError),
    RequestRefillAll,
    RefillAllResolved(bool),
    RefillDone(Result<RefillOutcome, ApiError>),
    AlertExpired(u64),
    DismissAlert(u64),
}

pub struct AdminPage {
    levels: Vec<IngredientStatus>,
    loading: bool,
    refill_target: Option<(u32, String)>,
    confirm_refill_all: bool,
    alerts: Alerts,
}

fn refill_constraints() -> PromptConstraints {
    PromptConstraints {
        max_len: 4,
        allow_decimal: false,
        min: Some(1.0),
        max: Some(REFILL_ALL_LEVEL_ML),
    }
}

impl AdminPage {
    fn notify(
        &mut self,
        ctx: &Context<Self>,
        kind: AlertKind,
        title: &'static str,
        message: impl Into<AttrValue>,
    ) {
        let id = self.alerts.push(kind, title, message, None);
        ctx.link().send_future(async move {
            let _ = dom::sleep_ms(DEFAULT_TIMEOUT_MS).await;
            Msg::AlertExpired(id)
        });
    }

    fn reload(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        ctx.link()
            .send_future(async { Msg::LevelsLoaded(api::load_ingredient_levels().await) });
    }

    fn level_row(&self, ctx: &Context<Self>, status: &IngredientStatus) -> Html {
        let id = status.ingredient_id;
        let onclick = ctx
            .link()
            .callback(move |_: MouseEvent| Msg::RequestRefill(id));
        let pump = status
            .pump_id
            .map_or_else(|| "manuell".to_string(), |p| format!("Pumpe {p}"));
        html! {
            <tr key={id.to_string()}>
                <td>{ &status.ingredient_name }</td>
                <td class="level-cell">{ format!("{} ml", status.current_level) }</td>
                <td>{ pump }</td>
                <td>
                    <button type="button" class="sort-btn" {onclick} disabled={!status.is_liquid}>
                        { "Auffüllen" }
                    </button>
                </td>
            </tr>
        }
    }
}

impl Component for AdminPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            levels: Vec::new(),
            loading: false,
            refill_target: None,
            confirm_refill_all: false,
            alerts: Alerts::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && ctx.props().unlocked {
            self.reload(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LevelsLoaded(Ok(levels)) => {
                self.levels = levels;
                self.loading = false;
                true
            }
            Msg::LevelsLoaded(Err(err)) => {
                log::error!("Failed to load ingredient levels: {err}");
                self.loading = false;
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Serverfehler",
                    "Zutaten-Status konnte nicht geladen werden.",
                );
                true
            }
            Msg::RequestRefill(id) => {
                let name = self
                    .levels
                    .iter()
                    .find(|s| s.ingredient_id == id)
                    .map(|s| s.ingredient_name.clone());
                if let Some(name) = name {
                    self.refill_target = Some((id, name));
                }
                true
            }
            Msg::RefillValue(Some(amount)) => {
                let Some((id, _)) = self.refill_target.take() else {
                    return false;
                };
                ctx.link().send_future(async move {
                    Msg::RefillDone(api::refill_ingredient(id, amount).await)
                });
                true
            }
            Msg::RefillValue(None) => {
                self.refill_target = None;
                true
            }
            Msg::RefillInvalid(err) => {
                self.notify(ctx, AlertKind::Warning, "Ungültige Eingabe", err.to_string());
                true
            }
            Msg::RequestRefillAll => {
                self.confirm_refill_all = true;
                true
            }
            Msg::RefillAllResolved(confirmed) => {
                self.confirm_refill_all = false;
                if confirmed {
                    ctx.link().send_future(async {
                        Msg::RefillDone(api::refill_all(REFILL_ALL_LEVEL_ML).await)
                    });
                }
                true
            }
            Msg::RefillDone(Ok(outcome)) => {
                let message = outcome
                    .message
                    .unwrap_or_else(|| "Zutaten aktualisiert.".to_string());
                self.notify(ctx, AlertKind::Success, "Erledigt", message);
                self.reload(ctx);
                true
            }
            Msg::RefillDone(Err(err)) => {
                log::error!("Refill failed: {err}");
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Serverfehler",
                    "Auffüllen fehlgeschlagen.",
                );
                true
            }
            Msg::AlertExpired(id) | Msg::DismissAlert(id) => {
                self.alerts.dismiss(id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().unlocked {
            return html! { <Redirect<Route> to={Route::Kiosk} /> };
        }

        let link = ctx.link();
        let prompt_request = self.refill_target.as_ref().map(|(_, name)| PromptRequest {
            title: AttrValue::from("Zutat auffüllen"),
            message: AttrValue::from(format!("Menge in ml für {name}")),
            constraints: refill_constraints(),
        });

        let body = if self.loading && self.levels.is_empty() {
            html! { <p class="empty-message">{ "Lade Zutaten-Status…" }</p> }
        } else {
            html! {
                <table class="level-table">
                    <thead>
                        <tr>
                            <th>{ "Zutat" }</th>
                            <th>{ "Füllstand" }</th>
                            <th>{ "Anschluss" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.levels.iter().map(|status| self.level_row(ctx, status)) }
                    </tbody>
                </table>
            }
        };

        html! {
            <main class="admin">
                <header class="kiosk-header">
                    <h1>{ "Admin" }</h1>
                    <nav>
                        <button type="button" class="save-btn"
                                onclick={link.callback(|_: MouseEvent| Msg::RequestRefillAll)}>
                            { "Alle auffüllen" }
                        </button>
                        <Link<Route> classes="sort-btn" to={Route::Kiosk}>
                            { "Zurück zum Kiosk" }
                        </Link<Route>>
                    </nav>
                </header>
                { body }
                <NumberPromptDialog
                    request={prompt_request}
                    on_resolve={link.callback(Msg::RefillValue)}
                    on_invalid={link.callback(Msg::RefillInvalid)}
                />
                <ConfirmDialog
                    open={self.confirm_refill_all}
                    title="Alle Zutaten auffüllen"
                    message={format!("Alle Zutaten auf {REFILL_ALL_LEVEL_ML} ml setzen?")}
                    confirm_label="Auffüllen"
                    cancel_label="Abbrechen"
                    on_resolve={link.callback(Msg::RefillAllResolved)}
                />
                <AlertHost alerts={self.alerts.clone()} on_dismiss={link.callback(Msg::DismissAlert)} />
            </main>
        }
    }
}
