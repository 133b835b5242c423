use yew::prelude::*;

/// Dimmed backdrop hosting the active popup.
///
/// Clicking the backdrop closes the popup; clicks inside the popup frame stop
/// propagating so they never reach the backdrop handler.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PopupLayer)]
pub fn popup_layer(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_frame_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="bg-layer active" role="presentation" onclick={on_backdrop}>
            <div class="popup active" onclick={on_frame_click}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew::html::ChildrenRenderer;

    #[test]
    fn renders_children_when_open_and_nothing_when_closed() {
        let open_props = Props {
            open: true,
            on_close: Callback::noop(),
            children: ChildrenRenderer::new(vec![html! { <p>{"Inhalt"}</p> }]),
        };
        let html = block_on(LocalServerRenderer::<PopupLayer>::with_props(open_props).render());
        assert!(html.contains("bg-layer"));
        assert!(html.contains("Inhalt"));

        let closed_props = Props {
            open: false,
            on_close: Callback::noop(),
            children: ChildrenRenderer::default(),
        };
        let html = block_on(LocalServerRenderer::<PopupLayer>::with_props(closed_props).render());
        assert!(!html.contains("bg-layer"));
    }
}
