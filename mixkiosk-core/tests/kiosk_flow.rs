//! End-to-end exercises of the core kiosk state machines, driven the way the
//! UI drives them.

use mixkiosk_core::{
    CatalogView, CategoryFilter, Cocktail, PIN_LENGTH, PinBuffer, PinPurpose, Popup, PopupState,
    catalog_view,
};

fn sample_catalog() -> Vec<Cocktail> {
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

#[test]
fn pin_success_for_alcohol_sets_filter_and_closes_popup() {
    let catalog = sample_catalog();
    let mut popup = PopupState::new();
    let mut pin = PinBuffer::new();

    popup.open(Popup::Pin(PinPurpose::Alcohol));
    for digit in ['1', '2', '3', '4'] {
        pin.push(digit);
    }
    let code = pin.take_code().expect("four digits entered");
    assert_eq!(code.len(), PIN_LENGTH);

    // Backend said yes, and the response is still current.
    let issued = popup.generation();
    assert!(popup.is_current(issued));
    let filter = Some(CategoryFilter::Alcoholic);
    popup.close();

    assert!(!popup.is_open());
    let CatalogView::Drinks(drinks) = catalog_view(&catalog, filter) else {
        panic!("expected drinks after unlock");
    };
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "B");
}

#[test]
fn pin_failure_keeps_popup_open_with_empty_buffer() {
    let mut popup = PopupState::new();
    let mut pin = PinBuffer::new();

    popup.open(Popup::Pin(PinPurpose::Admin));
    for digit in ['9', '9', '9', '9'] {
        pin.push(digit);
    }
    let _code = pin.take_code().expect("complete entry");

    // A digit typed while the check is still in flight.
    assert!(pin.push('5'));

    // Backend said no: the failure handler drains the buffer, popup stays open.
    pin.clear();
    assert!(popup.is_open());
    assert!(pin.is_empty());
}

#[test]
fn response_after_popup_close_is_stale() {
    let mut popup = PopupState::new();
    popup.open(Popup::Pin(PinPurpose::Alcohol));
    let issued = popup.generation();

    // Backdrop click while the check is in flight.
    popup.close();
    assert!(!popup.is_current(issued));

    // Even reopening the same popup must not resurrect the old continuation.
    popup.open(Popup::Pin(PinPurpose::Alcohol));
    assert!(!popup.is_current(issued));
}

#[test]
fn swapping_from_drink_to_pin_discards_drink_scoped_fetches() {
    let mut popup = PopupState::new();
    popup.open(Popup::Drink(1));
    popup.set_ingredients_open(true);
    let issued = popup.generation();

    popup.open(Popup::Pin(PinPurpose::Admin));
    assert_eq!(popup.active(), Some(Popup::Pin(PinPurpose::Admin)));
    assert!(!popup.ingredients_open());
    assert!(!popup.is_current(issued));
}
