use wasm_bindgen_test::*;
use yew::Renderer;

use mixkiosk_web::app::App;
use mixkiosk_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::window().document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn kiosk_page_mounts_with_category_bar_and_welcome() {
    render_app();
    let doc = dom::window().document().expect("document");
    let bar = doc
        .query_selector(".category-bar")
        .expect("query category bar")
        .expect("category bar exists");
    assert_eq!(bar.tag_name(), "NAV");
    let welcome = doc
        .query_selector(".placeholder-message")
        .expect("query placeholder")
        .expect("welcome placeholder exists");
    assert!(welcome.inner_html().contains("Willkommen zum Cocktailmixer!"));
}

#[wasm_bindgen_test]
fn admin_entry_is_reachable_from_the_header() {
    render_app();
    let doc = dom::window().document().expect("document");
    let admin = doc
        .query_selector(".kiosk-header .admin-btn")
        .expect("query admin button")
        .expect("admin button exists");
    assert_eq!(admin.tag_name(), "BUTTON");
}
