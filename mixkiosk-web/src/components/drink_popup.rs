use mixkiosk_core::catalog::{Cocktail, Ingredient};
use yew::prelude::*;

/// Per-cocktail state of the lazily loaded ingredients panel.
#[derive(Clone, Debug, PartialEq)]
pub enum IngredientsEntry {
    Loading,
    Loaded(Vec<Ingredient>),
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cocktail: Cocktail,
    pub ingredients_open: bool,
    /// Cache entry for this cocktail, if a fetch was started at some point.
    pub ingredients: Option<IngredientsEntry>,
    pub on_toggle_ingredients: Callback<()>,
    pub on_order: Callback<u32>,
}

fn ingredient_row(ingredient: &Ingredient) -> Html {
    html! {
        <li class="ingredient-item">
            <span>{ &ingredient.name }</span>
            { ingredient.amount_ml.map(|amount| html! {
                <span class="ingredient-amount">{ format!("{amount} ml") }</span>
            }).unwrap_or_default() }
        </li>
    }
}

fn ingredients_list(entry: Option<&IngredientsEntry>) -> Html {
    match entry {
        None | Some(IngredientsEntry::Loading) => html! {
            <li class="ingredient-item">{ "Lade Zutaten…" }</li>
        },
        Some(IngredientsEntry::Failed) => html! {
            <li class="ingredient-item ingredient-item--error">{ "Fehler beim Laden" }</li>
        },
        Some(IngredientsEntry::Loaded(rows)) if rows.is_empty() => html! {
            <li class="ingredient-item">{ "Keine Zutaten gefunden" }</li>
        },
        Some(IngredientsEntry::Loaded(rows)) => html! {
            { for rows.iter().map(ingredient_row) }
        },
    }
}

#[function_component(DrinkPopup)]
pub fn drink_popup(props: &Props) -> Html {
    let on_toggle = {
        let cb = props.on_toggle_ingredients.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_order = {
        let cb = props.on_order.clone();
        let id = props.cocktail.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    let toggle_label = if props.ingredients_open {
        "Zutaten ausblenden"
    } else {
        "Zutaten anzeigen"
    };
    let wrap_class = classes!(
        "drink-popup-wrap",
        props.ingredients_open.then_some("show-ingredients"),
    );

    html! {
        <div class={wrap_class}>
            <div class="popup-drink">
                <img class="drink-img big" draggable="false"
                     src={props.cocktail.image().to_string()}
                     alt={props.cocktail.name.clone()} />
                <h2 class="drink-title">{ &props.cocktail.name }</h2>
                <p class="drink-description">{ props.cocktail.description_text() }</p>
                <div class="drink-actions">
                    <button type="button" class="sort-btn" onclick={on_toggle}>
                        { toggle_label }
                    </button>
                    <button type="button" class="save-btn" onclick={on_order}>
                        { "Bestellen" }
                    </button>
                </div>
            </div>
            <aside class="ingredients-panel"
                   aria-hidden={if props.ingredients_open { "false" } else { "true" }}>
                <ul class="ingredients-list">
                    { ingredients_list(props.ingredients.as_ref()) }
                </ul>
            </aside>
        </div>
    }
}
