use yew::prelude::*;

/// Shared on-screen keypad used by the PIN popup and the number dialog.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_digit: Callback<char>,
    pub on_backspace: Callback<()>,
    #[prop_or_default]
    pub allow_decimal: bool,
    #[prop_or_default]
    pub on_decimal: Callback<()>,
}

#[function_component(Numpad)]
pub fn numpad(props: &Props) -> Html {
    let digit_key = |digit: char| {
        let on_digit = props.on_digit.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_digit.emit(digit));
        html! {
            <button type="button" class="key" data-key={digit.to_string()} {onclick}>
                { digit }
            </button>
        }
    };

    let decimal_key = if props.allow_decimal {
        let on_decimal = props.on_decimal.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_decimal.emit(()));
        html! {
            <button type="button" class="key" data-key="." {onclick}>{ "." }</button>
        }
    } else {
        html! { <span class="key key--spacer" aria-hidden="true"></span> }
    };

    let backspace = {
        let on_backspace = props.on_backspace.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_backspace.emit(()));
        html! {
            <button type="button" class="key back" aria-label="Letzte Ziffer löschen" {onclick}>
                { "←" }
            </button>
        }
    };

    html! {
        <div class="numpad-row" role="group" aria-label="Ziffernblock">
            { for ('1'..='9').map(&digit_key) }
            { decimal_key }
            { digit_key('0') }
            { backspace }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_all_digits_and_backspace() {
        let props = Props {
            on_digit: Callback::noop(),
            on_backspace: Callback::noop(),
            allow_decimal: false,
            on_decimal: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Numpad>::with_props(props).render());
        for digit in '0'..='9' {
            assert!(html.contains(&format!("data-key=\"{digit}\"")));
        }
        assert!(html.contains("key back"));
        assert!(!html.contains("data-key=\".\""));
    }

    #[test]
    fn decimal_key_appears_only_when_allowed() {
        let props = Props {
            on_digit: Callback::noop(),
            on_backspace: Callback::noop(),
            allow_decimal: true,
            on_decimal: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Numpad>::with_props(props).render());
        assert!(html.contains("data-key=\".\""));
    }
}
