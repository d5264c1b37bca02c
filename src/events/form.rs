use crate::constants::*;
use crate::core::{notice_schedule, style, NoticePhase, SubmitStep, SUBMIT_STEPS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercept the contact form: no navigation, no network, just a toast.
pub fn wire_contact_form(document: &web::Document) -> bool {
    let Some(form) = dom::query_first(document, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return false;
    };
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        for step in SUBMIT_STEPS {
            match step {
                SubmitStep::SuppressNavigation => ev.prevent_default(),
                SubmitStep::LogFields => {
                    log::debug!("[form] contact submitted: fields={:?}", field_names(&target));
                }
                SubmitStep::AppendNotice => show_notice(&target),
                SubmitStep::ResetForm => target.reset(),
            }
        }
    });
    true
}

fn field_names(form: &web::HtmlFormElement) -> Vec<String> {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    iter.filter_map(Result::ok)
        .filter_map(|pair| js_sys::Array::from(&pair).get(0).as_string())
        .collect()
}

/// Append one success notice to `form` and schedule its fade and removal.
pub fn show_notice(form: &web::HtmlFormElement) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(notice) = document.create_element("div") else {
        return;
    };
    notice.set_class_name(NOTICE_CLASS);
    _ = notice.set_attribute("style", style::NOTICE_CSS);
    notice.set_text_content(Some(NOTICE_TEXT));
    if form.append_child(&notice).is_err() {
        return;
    }
    for (at, phase) in notice_schedule() {
        let el = notice.clone();
        dom::set_timeout(&window, at.as_millis() as i32, move || match phase {
            NoticePhase::FadingOut => dom::set_style(&el, "animation", style::NOTICE_FADE_OUT),
            NoticePhase::Removed => el.remove(),
        });
    }
}
