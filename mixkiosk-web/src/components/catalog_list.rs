use mixkiosk_core::catalog::{CatalogView, CategoryFilter, Cocktail, catalog_view};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Vec<Cocktail>,
    pub filter: Option<CategoryFilter>,
    pub on_select: Callback<u32>,
}

#[function_component(CatalogList)]
pub fn catalog_list(props: &Props) -> Html {
    match catalog_view(&props.catalog, props.filter) {
        CatalogView::Welcome => html! {
            <div class="placeholder-message">
                <h1>{ "Willkommen zum Cocktailmixer!" }</h1>
                <p>{ "Bitte wähle eine Kategorie aus, um die Getränke anzuzeigen." }</p>
            </div>
        },
        CatalogView::NoMatches => html! {
            <p class="empty-message">{ "Keine Getränke gefunden." }</p>
        },
        CatalogView::Drinks(drinks) => html! {
            <div class="cocktail-list">
                { for drinks.into_iter().map(|cocktail| {
                    let on_select = props.on_select.clone();
                    let id = cocktail.id;
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id));
                    html! {
                        <button type="button" class="drink-button" {onclick}>
                            <img class="drink-img" draggable="false"
                                 src={cocktail.image().to_string()}
                                 alt={cocktail.name.clone()} />
                            <span>{ &cocktail.name }</span>
                        </button>
                    }
                }) }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn fixture() -> Vec<Cocktail> {
        vec![
            Cocktail {
                id: 1,
                name: "A".to_string(),
                alkoholisch: false,
                description: None,
                image_path: None,
            },
            Cocktail {
                id: 2,
                name: "B".to_string(),
                alkoholisch: true,
                description: None,
                image_path: None,
            },
        ]
    }

    fn render(filter: Option<CategoryFilter>) -> String {
        let props = Props {
            catalog: fixture(),
            filter,
            on_select: Callback::noop(),
        };
        block_on(LocalServerRenderer::<CatalogList>::with_props(props).render())
    }

    #[test]
    fn unset_filter_renders_welcome_placeholder() {
        let html = render(None);
        assert!(html.contains("Willkommen zum Cocktailmixer!"));
        assert!(!html.contains("drink-button"));
    }

    #[test]
    fn non_alcoholic_filter_renders_only_a() {
        let html = render(Some(CategoryFilter::NonAlcoholic));
        assert!(html.contains(">A<"));
        assert!(!html.contains(">B<"));
    }

    #[test]
    fn alcoholic_filter_renders_only_b() {
        let html = render(Some(CategoryFilter::Alcoholic));
        assert!(html.contains(">B<"));
        assert!(!html.contains(">A<"));
    }

    #[test]
    fn rerender_with_same_filter_is_stable() {
        let first = render(Some(CategoryFilter::Alcoholic));
        let second = render(Some(CategoryFilter::Alcoholic));
        assert_eq!(first, second);
    }

    #[test]
    fn filter_without_matches_renders_empty_message() {
        let props = Props {
            catalog: Vec::new(),
            filter: Some(CategoryFilter::Alcoholic),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CatalogList>::with_props(props).render());
        assert!(html.contains("Keine Getränke gefunden."));
    }
}
