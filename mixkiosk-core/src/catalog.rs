//! Catalog data model and category filtering.
//!
//! The backend is the source of truth for the drink list; the client keeps an
//! in-memory copy per page load. Field aliases absorb the naming drift between
//! backend revisions (`name`/`ingredient_name`, `amount_ml`/`amount`,
//! `image_path`/`image_url`).

use serde::{Deserialize, Serialize};

/// A drink as served by `GET /api/cocktails`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub alkoholisch: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image_path: Option<String>,
}

impl Cocktail {
    /// Image to display for this drink, falling back to a neutral placeholder.
    #[must_use]
    pub fn image(&self) -> &str {
        self.image_path
            .as_deref()
            .unwrap_or("https://placehold.jp/3d4070/ffffff/128x128.png")
    }

    /// Description text, with a fallback for drinks the backend left blank.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Keine Beschreibung verfügbar.")
    }
}

/// One row of `GET /api/cocktails/{id}/ingredients`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(alias = "ingredient_name")]
    pub name: String,
    #[serde(default, alias = "amount")]
    pub amount_ml: Option<f64>,
}

/// One row of `GET /api/ingredients` (stock levels, admin view).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientStatus {
    pub ingredient_id: u32,
    #[serde(alias = "name")]
    pub ingredient_name: String,
    #[serde(default)]
    pub is_liquid: bool,
    #[serde(default)]
    pub current_level: f64,
    #[serde(default)]
    pub pump_id: Option<u32>,
}

/// Response of the admin refill endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RefillOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub new_level: Option<f64>,
    #[serde(default)]
    pub updated_count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The alcoholic / non-alcoholic partition of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    NonAlcoholic,
    Alcoholic,
}

impl CategoryFilter {
    #[must_use]
    pub const fn matches(self, cocktail: &Cocktail) -> bool {
        match self {
            Self::NonAlcoholic => !cocktail.alkoholisch,
            Self::Alcoholic => cocktail.alkoholisch,
        }
    }
}

/// What the catalog area should show for a given cache and filter.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView<'a> {
    /// No category picked yet; show the welcome placeholder.
    Welcome,
    /// A category is picked but nothing in the cache matches it.
    NoMatches,
    /// Matching drinks, in catalog order.
    Drinks(Vec<&'a Cocktail>),
}

/// Pure projection of the cached catalog through the active filter.
///
/// Deterministic and idempotent: the same cache and filter always yield the
/// same view.
#[must_use]
pub fn catalog_view(catalog: &[Cocktail], filter: Option<CategoryFilter>) -> CatalogView<'_> {
    let Some(filter) = filter else {
        return CatalogView::Welcome;
    };
    let matches: Vec<&Cocktail> = catalog.iter().filter(|c| filter.matches(c)).collect();
    if matches.is_empty() {
        CatalogView::NoMatches
    } else {
        CatalogView::Drinks(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
                description: Some("Strong".to_string()),
                image_path: Some("../images/B.png".to_string()),
            },
        ]
    }

    #[test]
    fn unset_filter_shows_welcome_not_empty_list() {
        let catalog = fixture();
        assert_eq!(catalog_view(&catalog, None), CatalogView::Welcome);
    }

    #[test]
    fn non_alcoholic_filter_yields_exactly_a() {
        let catalog = fixture();
        let CatalogView::Drinks(drinks) =
            catalog_view(&catalog, Some(CategoryFilter::NonAlcoholic))
        else {
            panic!("expected drinks");
        };
        let names: Vec<&str> = drinks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn alcoholic_filter_yields_exactly_b() {
        let catalog = fixture();
        let CatalogView::Drinks(drinks) = catalog_view(&catalog, Some(CategoryFilter::Alcoholic))
        else {
            panic!("expected drinks");
        };
        let names: Vec<&str> = drinks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn filter_with_no_matches_reports_no_matches() {
        let catalog: Vec<Cocktail> = fixture()
            .into_iter()
            .filter(|c| c.alkoholisch)
            .collect();
        assert_eq!(
            catalog_view(&catalog, Some(CategoryFilter::NonAlcoholic)),
            CatalogView::NoMatches
        );
    }

    #[test]
    fn view_is_deterministic_for_same_inputs() {
        let catalog = fixture();
        let first = catalog_view(&catalog, Some(CategoryFilter::Alcoholic));
        let second = catalog_view(&catalog, Some(CategoryFilter::Alcoholic));
        assert_eq!(first, second);
    }

    #[test]
    fn cocktail_decodes_backend_shape_with_image_url_alias() {
        let json = r#"{"id": 7, "name": "Mojito", "alkoholisch": true,
                       "description": "Rum, Limette, Minze",
                       "image_url": "https://example.test/mojito.png"}"#;
        let cocktail: Cocktail = serde_json::from_str(json).expect("decode");
        assert_eq!(cocktail.id, 7);
        assert!(cocktail.alkoholisch);
        assert_eq!(cocktail.image(), "https://example.test/mojito.png");
    }

    #[test]
    fn ingredient_decodes_both_field_spellings() {
        let a: Ingredient =
            serde_json::from_str(r#"{"name": "Rum", "amount_ml": 40}"#).expect("decode");
        let b: Ingredient =
            serde_json::from_str(r#"{"ingredient_name": "Rum", "amount": 40}"#).expect("decode");
        assert_eq!(a, b);
        assert_eq!(a.amount_ml, Some(40.0));
    }

    #[test]
    fn missing_image_and_description_fall_back() {
        let cocktail: Cocktail =
            serde_json::from_str(r#"{"id": 1, "name": "Wasser"}"#).expect("decode");
        assert!(cocktail.image().contains("placehold"));
        assert_eq!(cocktail.description_text(), "Keine Beschreibung verfügbar.");
    }

    #[test]
    fn ingredient_status_decodes_backend_row() {
        let row: IngredientStatus = serde_json::from_str(
            r#"{"ingredient_id": 3, "ingredient_name": "Limettensaft",
                "is_liquid": true, "current_level": 1200, "pump_id": 2}"#,
        )
        .expect("decode");
        assert_eq!(row.ingredient_name, "Limettensaft");
        assert_eq!(row.pump_id, Some(2));
    }
}
