use mixkiosk_core::pin::{PIN_LENGTH, PinPurpose};
use yew::prelude::*;

use crate::components::numpad::Numpad;

/// PIN entry popup content: purpose heading, indicator dots and the keypad.
/// The page owns the digit buffer; this component only mirrors it.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub purpose: PinPurpose,
    /// Number of digits entered so far, 0..=PIN_LENGTH.
    pub filled: usize,
    pub on_digit: Callback<char>,
    pub on_backspace: Callback<()>,
}

const fn heading(purpose: PinPurpose) -> &'static str {
    match purpose {
        PinPurpose::Alcohol => "PIN für alkoholische Getränke",
        PinPurpose::Admin => "Admin-PIN eingeben",
    }
}

#[function_component(PinPopup)]
pub fn pin_popup(props: &Props) -> Html {
    let dots = (0..PIN_LENGTH).map(|index| {
        let class = classes!("dot", (index < props.filled).then_some("filled"));
        html! { <span class={class}></span> }
    });

    html! {
        <div class="popup-pin">
            <h2 class="pin-title">{ heading(props.purpose) }</h2>
            <div class="pin-dots" aria-label="PIN-Eingabe">
                { for dots }
            </div>
            <Numpad on_digit={props.on_digit.clone()} on_backspace={props.on_backspace.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(purpose: PinPurpose, filled: usize) -> String {
        let props = Props {
            purpose,
            filled,
            on_digit: Callback::noop(),
            on_backspace: Callback::noop(),
        };
        block_on(LocalServerRenderer::<PinPopup>::with_props(props).render())
    }

    #[test]
    fn renders_four_dots_with_fill_mirroring_buffer() {
        let html = render(PinPurpose::Alcohol, 2);
        assert_eq!(html.matches("\"dot").count(), PIN_LENGTH);
        assert_eq!(html.matches("\"dot filled\"").count(), 2);
    }

    #[test]
    fn heading_names_the_purpose() {
        assert!(render(PinPurpose::Alcohol, 0).contains("alkoholische"));
        assert!(render(PinPurpose::Admin, 0).contains("Admin-PIN"));
    }

    #[test]
    fn keypad_is_present() {
        assert!(render(PinPurpose::Admin, 0).contains("numpad-row"));
    }
}
