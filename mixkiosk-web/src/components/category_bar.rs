use mixkiosk_core::catalog::CategoryFilter;
use yew::prelude::*;

/// Category selection bar. The alcoholic entry does not flip the filter
/// itself; it asks the page to run the PIN gate first.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filter: Option<CategoryFilter>,
    pub on_select_non_alcoholic: Callback<()>,
    pub on_request_alcoholic: Callback<()>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &Props) -> Html {
    let non_alcoholic_class = classes!(
        "selection",
        (props.filter == Some(CategoryFilter::NonAlcoholic)).then_some("active"),
    );
    let alcoholic_class = classes!(
        "selection",
        (props.filter == Some(CategoryFilter::Alcoholic)).then_some("active"),
    );

    let on_non_alcoholic = {
        let cb = props.on_select_non_alcoholic.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_alcoholic = {
        let cb = props.on_request_alcoholic.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class="category-bar" aria-label="Kategorien">
            <button type="button" class={non_alcoholic_class} onclick={on_non_alcoholic}>
                { "Alkoholfrei" }
            </button>
            <button type="button" class={alcoholic_class} onclick={on_alcoholic}>
                { "Mit Alkohol" }
            </button>
        </nav>
    }
}
