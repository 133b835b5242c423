//! Main kiosk page: category selection, catalog, popups and the PIN gate.
//!
//! All state lives in the component; async results come back as messages
//! tagged with the popup generation they were issued under, so anything that
//! resolves after the popup moved on is dropped in `update`.

use std::collections::HashMap;

use mixkiosk_core::catalog::{CategoryFilter, Cocktail, Ingredient};
use mixkiosk_core::order::OrderConfirmation;
use mixkiosk_core::pin::{PinBuffer, PinPurpose};
use mixkiosk_core::popup::{Popup, PopupState};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::api::{self, ApiError};
use crate::components::alerts::{AlertHost, AlertKind, Alerts, ConfirmDialog, DEFAULT_TIMEOUT_MS};
use crate::components::catalog_list::CatalogList;
use crate::components::category_bar::CategoryBar;
use crate::components::drink_popup::{DrinkPopup, IngredientsEntry};
use crate::components::pin_popup::PinPopup;
use crate::components::popup_layer::PopupLayer;
use crate::dom;
use crate::router::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Notified once the admin PIN was accepted, before navigating away.
    #[prop_or_default]
    pub on_admin_unlocked: Callback<()>,
}

pub enum Msg {
    CatalogLoaded(Result<Vec<Cocktail>, ApiError>),
    SelectNonAlcoholic,
    RequestAlcohol,
    RequestAdmin,
    OpenDrink(u32),
    ClosePopup,
    PinDigit(char),
    PinBackspace,
    PinChecked {
        generation: u64,
        purpose: PinPurpose,
        outcome: Result<bool, ApiError>,
    },
    ToggleIngredients,
    IngredientsLoaded {
        generation: u64,
        cocktail_id: u32,
        result: Result<Vec<Ingredient>, ApiError>,
    },
    RequestOrder(u32),
    OrderResolved(bool),
    OrderCompleted(Result<OrderConfirmation, ApiError>),
    AlertExpired(u64),
    DismissAlert(u64),
}

pub struct KioskPage {
    catalog: Vec<Cocktail>,
    filter: Option<CategoryFilter>,
    popup: PopupState,
    pin: PinBuffer,
    ingredients: HashMap<u32, IngredientsEntry>,
    pending_order: Option<u32>,
    alerts: Alerts,
}

/// Order summaries with manual steps stay up longer so they can be read.
const ORDER_STEPS_TIMEOUT_MS: i32 = 8000;

fn order_confirm_message(name: &str) -> String {
    format!("{name} jetzt bestellen?")
}

impl KioskPage {
    fn notify(
        &mut self,
        ctx: &Context<Self>,
        kind: AlertKind,
        title: &'static str,
        message: impl Into<AttrValue>,
    ) {
        self.notify_for(ctx, kind, title, message, None);
    }

    fn notify_for(
        &mut self,
        ctx: &Context<Self>,
        kind: AlertKind,
        title: &'static str,
        message: impl Into<AttrValue>,
        timeout_ms: Option<i32>,
    ) {
        let delay = timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        let id = self.alerts.push(kind, title, message, Some(delay));
        ctx.link().send_future(async move {
            let _ = dom::sleep_ms(delay).await;
            Msg::AlertExpired(id)
        });
    }

    fn start_pin_entry(&mut self, purpose: PinPurpose) {
        self.pin.clear();
        self.popup.open(Popup::Pin(purpose));
    }

    fn handle_pin_digit(&mut self, ctx: &Context<Self>, digit: char) -> bool {
        if !self.pin.push(digit) {
            return false;
        }
        // Verification fires exactly once, when the fourth digit lands.
        if let Some(code) = self.pin.take_code() {
            if let Some(Popup::Pin(purpose)) = self.popup.active() {
                let generation = self.popup.generation();
                ctx.link().send_future(async move {
                    let outcome = api::check_pin(&code, purpose).await;
                    Msg::PinChecked {
                        generation,
                        purpose,
                        outcome,
                    }
                });
            }
        }
        true
    }

    fn handle_pin_checked(
        &mut self,
        ctx: &Context<Self>,
        purpose: PinPurpose,
        outcome: Result<bool, ApiError>,
    ) -> bool {
        match outcome {
            Ok(true) => match purpose {
                PinPurpose::Alcohol => {
                    self.filter = Some(CategoryFilter::Alcoholic);
                    self.popup.close();
                    true
                }
                PinPurpose::Admin => {
                    self.popup.close();
                    ctx.props().on_admin_unlocked.emit(());
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::Admin);
                    }
                    true
                }
            },
            Ok(false) => {
                // Digits typed while the check was in flight must not survive.
                self.pin.clear();
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Zugriff verweigert",
                    "Der eingegebene PIN ist falsch.",
                );
                true
            }
            Err(err) => {
                log::error!("PIN check failed: {err}");
                self.pin.clear();
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Serverfehler",
                    "PIN konnte nicht überprüft werden.",
                );
                true
            }
        }
    }

    fn handle_toggle_ingredients(&mut self, ctx: &Context<Self>) -> bool {
        let Some(Popup::Drink(cocktail_id)) = self.popup.active() else {
            return false;
        };
        let open = !self.popup.ingredients_open();
        self.popup.set_ingredients_open(open);

        let cached = matches!(
            self.ingredients.get(&cocktail_id),
            Some(IngredientsEntry::Loading | IngredientsEntry::Loaded(_))
        );
        if open && !cached {
            self.ingredients.insert(cocktail_id, IngredientsEntry::Loading);
            let generation = self.popup.generation();
            ctx.link().send_future(async move {
                Msg::IngredientsLoaded {
                    generation,
                    cocktail_id,
                    result: api::load_ingredients(cocktail_id).await,
                }
            });
        }
        true
    }

    fn handle_ingredients_loaded(
        &mut self,
        generation: u64,
        cocktail_id: u32,
        result: Result<Vec<Ingredient>, ApiError>,
    ) -> bool {
        match result {
            // The cache is keyed by cocktail and lives for the whole session,
            // so a late success still fills it; only the UI update is gated.
            Ok(rows) => {
                self.ingredients
                    .insert(cocktail_id, IngredientsEntry::Loaded(rows));
                self.popup.is_current(generation)
            }
            Err(err) => {
                log::error!("Failed to load ingredients for cocktail {cocktail_id}: {err}");
                if self.popup.is_current(generation) {
                    self.ingredients.insert(cocktail_id, IngredientsEntry::Failed);
                    true
                } else {
                    self.ingredients.remove(&cocktail_id);
                    false
                }
            }
        }
    }

    fn active_popup_html(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.popup.active() {
            Some(Popup::Drink(id)) => match self.catalog.iter().find(|c| c.id == id) {
                Some(cocktail) => html! {
                    <DrinkPopup
                        cocktail={cocktail.clone()}
                        ingredients_open={self.popup.ingredients_open()}
                        ingredients={self.ingredients.get(&id).cloned()}
                        on_toggle_ingredients={link.callback(|()| Msg::ToggleIngredients)}
                        on_order={link.callback(Msg::RequestOrder)}
                    />
                },
                None => Html::default(),
            },
            Some(Popup::Pin(purpose)) => html! {
                <PinPopup
                    purpose={purpose}
                    filled={self.pin.len()}
                    on_digit={link.callback(Msg::PinDigit)}
                    on_backspace={link.callback(|()| Msg::PinBackspace)}
                />
            },
            None => Html::default(),
        }
    }
}

impl Component for KioskPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            catalog: Vec::new(),
            filter: None,
            popup: PopupState::new(),
            pin: PinBuffer::new(),
            ingredients: HashMap::new(),
            pending_order: None,
            alerts: Alerts::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link()
                .send_future(async { Msg::CatalogLoaded(api::load_cocktails().await) });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CatalogLoaded(Ok(catalog)) => {
                self.catalog = catalog;
                true
            }
            Msg::CatalogLoaded(Err(err)) => {
                dom::console_error(&format!("Fehler beim Laden der Cocktails: {err}"));
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Serverfehler",
                    "Die Getränkeliste konnte nicht geladen werden.",
                );
                true
            }
            Msg::SelectNonAlcoholic => {
                self.filter = Some(CategoryFilter::NonAlcoholic);
                true
            }
            Msg::RequestAlcohol => {
                self.start_pin_entry(PinPurpose::Alcohol);
                true
            }
            Msg::RequestAdmin => {
                self.start_pin_entry(PinPurpose::Admin);
                true
            }
            Msg::OpenDrink(id) => {
                self.popup.open(Popup::Drink(id));
                true
            }
            Msg::ClosePopup => {
                self.popup.close();
                self.pin.clear();
                true
            }
            Msg::PinDigit(digit) => self.handle_pin_digit(ctx, digit),
            Msg::PinBackspace => {
                self.pin.backspace();
                true
            }
            Msg::PinChecked {
                generation,
                purpose,
                outcome,
            } => {
                if !self.popup.is_current(generation) {
                    // The PIN popup is gone; the verdict no longer matters.
                    return false;
                }
                self.handle_pin_checked(ctx, purpose, outcome)
            }
            Msg::ToggleIngredients => self.handle_toggle_ingredients(ctx),
            Msg::IngredientsLoaded {
                generation,
                cocktail_id,
                result,
            } => self.handle_ingredients_loaded(generation, cocktail_id, result),
            Msg::RequestOrder(id) => {
                self.pending_order = Some(id);
                true
            }
            Msg::OrderResolved(confirmed) => {
                let Some(id) = self.pending_order.take() else {
                    return false;
                };
                if confirmed {
                    ctx.link()
                        .send_future(
                            async move { Msg::OrderCompleted(api::place_order(id).await) },
                        );
                }
                true
            }
            Msg::OrderCompleted(Ok(confirmation)) => {
                let timeout =
                    (!confirmation.instructions.is_empty()).then_some(ORDER_STEPS_TIMEOUT_MS);
                self.notify_for(
                    ctx,
                    AlertKind::Success,
                    "Bestellung aufgegeben",
                    confirmation.summary(),
                    timeout,
                );
                true
            }
            Msg::OrderCompleted(Err(err)) => {
                log::error!("Order failed: {err}");
                self.notify(
                    ctx,
                    AlertKind::Error,
                    "Bestellung fehlgeschlagen",
                    "Die Bestellung konnte nicht übermittelt werden.",
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
        let link = ctx.link();
        let pending_name = self
            .pending_order
            .and_then(|id| self.catalog.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Cocktail".to_string());

        html! {
            <main class="kiosk">
                <header class="kiosk-header">
                    <h1>{ "Cocktailmixer" }</h1>
                    <button type="button" class="admin-btn"
                            onclick={link.callback(|_: MouseEvent| Msg::RequestAdmin)}>
                        { "Admin" }
                    </button>
                </header>
                <CategoryBar
                    filter={self.filter}
                    on_select_non_alcoholic={link.callback(|()| Msg::SelectNonAlcoholic)}
                    on_request_alcoholic={link.callback(|()| Msg::RequestAlcohol)}
                />
                <CatalogList
                    catalog={self.catalog.clone()}
                    filter={self.filter}
                    on_select={link.callback(Msg::OpenDrink)}
                />
                <PopupLayer open={self.popup.is_open()} on_close={link.callback(|()| Msg::ClosePopup)}>
                    { self.active_popup_html(ctx) }
                </PopupLayer>
                <ConfirmDialog
                    open={self.pending_order.is_some()}
                    title="Bestellung bestätigen"
                    message={order_confirm_message(&pending_name)}
                    confirm_label="Bestellen"
                    cancel_label="Abbrechen"
                    on_resolve={link.callback(Msg::OrderResolved)}
                />
                <AlertHost alerts={self.alerts.clone()} on_dismiss={link.callback(Msg::DismissAlert)} />
            </main>
        }
    }
}
