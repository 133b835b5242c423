//! Themed alert subsystem: auto-expiring banners, a confirm dialog and a
//! numeric prompt dialog. Pages own an [`Alerts`] stack and schedule expiry
//! through their component link; the components here are pure views over it.

use mixkiosk_core::prompt::{NumberPrompt, PromptConstraints, PromptError};
use yew::prelude::*;

use crate::components::numpad::Numpad;

/// Default banner lifetime before auto-dismiss.
pub const DEFAULT_TIMEOUT_MS: i32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "app-alert--info",
            Self::Success => "app-alert--success",
            Self::Warning => "app-alert--warning",
            Self::Error => "app-alert--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertItem {
    pub id: u64,
    pub kind: AlertKind,
    pub title: AttrValue,
    pub message: AttrValue,
    /// Lifetime of this banner before auto-dismiss.
    pub timeout_ms: i32,
}

/// Ordered stack of visible banners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alerts {
    next_id: u64,
    items: Vec<AlertItem>,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a banner and return its id so the caller can schedule expiry.
    /// `timeout_ms` falls back to [`DEFAULT_TIMEOUT_MS`].
    pub fn push(
        &mut self,
        kind: AlertKind,
        title: impl Into<AttrValue>,
        message: impl Into<AttrValue>,
        timeout_ms: Option<i32>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(AlertItem {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            timeout_ms: timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        });
        id
    }

    /// Remove a banner; dismissing an already-gone id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[AlertItem] {
        &self.items
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AlertHostProps {
    pub alerts: Alerts,
    pub on_dismiss: Callback<u64>,
}

#[function_component(AlertHost)]
pub fn alert_host(props: &AlertHostProps) -> Html {
    html! {
        <div class="alert-host" aria-live="polite">
            { for props.alerts.items().iter().map(|item| {
                let on_dismiss = props.on_dismiss.clone();
                let id = item.id;
                let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));
                html! {
                    <div class={classes!("app-alert", item.kind.css_class())} role="alert">
                        <div class="app-alert__content">
                            <strong class="app-alert__title">{ item.title.clone() }</strong>
                            <span class="app-alert__message">{ item.message.clone() }</span>
                        </div>
                        <button type="button" class="app-alert__close" aria-label="Schließen" {onclick}>
                            { "×" }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

/// Modal confirm/cancel dialog. Resolves exactly once through `on_resolve`;
/// there is no auto-dismiss and no implicit default.
#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Bestätigen"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Abbrechen"))]
    pub cancel_label: AttrValue,
    pub on_resolve: Callback<bool>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let resolve = |value: bool| {
        let cb = props.on_resolve.clone();
        Callback::from(move |_: MouseEvent| cb.emit(value))
    };

    html! {
        <div class="app-alert app-alert--warning app-alert--dialog" role="alertdialog">
            <div class="app-alert__content">
                <strong class="app-alert__title">{ props.title.clone() }</strong>
                <span class="app-alert__message">{ props.message.clone() }</span>
                <div class="app-alert__actions">
                    <button type="button" class="save-btn" onclick={resolve(true)}>
                        { props.confirm_label.clone() }
                    </button>
                    <button type="button" class="sort-btn" onclick={resolve(false)}>
                        { props.cancel_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// What a page asks the number dialog to collect.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptRequest {
    pub title: AttrValue,
    pub message: AttrValue,
    pub constraints: PromptConstraints,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NumberPromptProps {
    pub request: Option<PromptRequest>,
    /// `Some(value)` on confirm, `None` on cancel.
    pub on_resolve: Callback<Option<f64>>,
    /// Fired when confirm is pressed with invalid input; the dialog stays open.
    pub on_invalid: Callback<PromptError>,
}

#[function_component(NumberPromptDialog)]
pub fn number_prompt_dialog(props: &NumberPromptProps) -> Html {
    let prompt = use_state(|| NumberPrompt::new(PromptConstraints::default()));

    // Fresh buffer whenever a new request opens the dialog.
    {
        let prompt = prompt.clone();
        use_effect_with(props.request.clone(), move |request| {
            if let Some(request) = request {
                prompt.set(NumberPrompt::new(request.constraints));
            }
            || {}
        });
    }

    let Some(request) = props.request.as_ref() else {
        return Html::default();
    };

    let on_digit = {
        let prompt = prompt.clone();
        Callback::from(move |digit: char| {
            let mut next = (*prompt).clone();
            next.push_digit(digit);
            prompt.set(next);
        })
    };
    let on_decimal = {
        let prompt = prompt.clone();
        Callback::from(move |()| {
            let mut next = (*prompt).clone();
            next.push_decimal();
            prompt.set(next);
        })
    };
    let on_backspace = {
        let prompt = prompt.clone();
        Callback::from(move |()| {
            let mut next = (*prompt).clone();
            next.backspace();
            prompt.set(next);
        })
    };
    let on_confirm = {
        let prompt = prompt.clone();
        let on_resolve = props.on_resolve.clone();
        let on_invalid = props.on_invalid.clone();
        Callback::from(move |_: MouseEvent| match prompt.submit() {
            Ok(value) => on_resolve.emit(Some(value)),
            Err(err) => on_invalid.emit(err),
        })
    };
    let on_cancel = {
        let on_resolve = props.on_resolve.clone();
        Callback::from(move |_: MouseEvent| on_resolve.emit(None))
    };

    let display = prompt.display();
    html! {
        <div class="app-alert app-alert--info app-alert--dialog" role="alertdialog">
            <div class="app-alert__content">
                <strong class="app-alert__title">{ request.title.clone() }</strong>
                <span class="app-alert__message">{ request.message.clone() }</span>
                <div class={classes!("app-alert__display", prompt.is_empty().then_some("is-empty"))}
                     aria-label="Eingabe">
                    { display }
                </div>
                <Numpad
                    on_digit={on_digit}
                    on_backspace={on_backspace}
                    allow_decimal={request.constraints.allow_decimal}
                    on_decimal={on_decimal}
                />
                <div class="app-alert__actions">
                    <button type="button" class="save-btn" onclick={on_confirm}>{ "OK" }</button>
                    <button type="button" class="sort-btn" onclick={on_cancel}>{ "Abbrechen" }</button>
                </div>
            </div>
        </div>
    }
}
