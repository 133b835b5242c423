pub mod alerts;
pub mod catalog_list;
pub mod category_bar;
pub mod drink_popup;
pub mod numpad;
pub mod pin_popup;
pub mod popup_layer;
