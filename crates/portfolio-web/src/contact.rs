//! In-page smooth scrolling and the contact form's fake send state.

use wasm_bindgen::JsCast;
use web_sys as web;

use portfolio_core::form::can_submit;

use crate::dom;

/// Intercept in-page anchor clicks and scroll smoothly to their targets.
pub fn init_smooth_scroll(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_selected(document, r#"a[href^="#"]"#, move |a| {
        let doc = doc.clone();
        let anchor = a.clone();
        dom::add_listener(&a, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            ev.prevent_default();
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            options.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    });
}

/// Flip the submit button to "Message Sent" when all fields are filled.
/// There is no backend; the button simply goes inert.
pub fn init_contact_form(document: &web::Document) {
    let Some(button) = dom::query_html(document, ".contact-submit") else {
        return;
    };
    let doc = document.clone();
    let btn = button.clone();
    dom::add_listener0(&button, "click", move || {
        let name = field_value(&doc, r#".contact-field input[type="text"]"#);
        let email = field_value(&doc, r#".contact-field input[type="email"]"#);
        let message = textarea_value(&doc, ".contact-field textarea");
        if can_submit(&name, &email, &message) {
            btn.set_text_content(Some("Message Sent"));
            let style = btn.style();
            let _ = style.set_property("opacity", "0.6");
            let _ = style.set_property("cursor", "default");
            let _ = style.set_property("pointer-events", "none");
        }
    });
}

fn field_value(document: &web::Document, selector: &str) -> String {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, selector: &str) -> String {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}
