use crate::constants::*;
use crate::dom;
use web_sys as web;

pub fn wire_mobile_menu(document: &web::Document) -> bool {
    let (Some(toggle), Some(menu)) = (
        dom::query_first(document, MENU_TOGGLE_SELECTOR),
        dom::query_first(document, MOBILE_MENU_SELECTOR),
    ) else {
        return false;
    };

    {
        let toggle_el = toggle.clone();
        let menu_el = menu.clone();
        dom::add_listener(&toggle, "click", move |_: web::MouseEvent| {
            _ = menu_el.class_list().toggle(ACTIVE_CLASS);
            _ = toggle_el.class_list().toggle(ACTIVE_CLASS);
        });
    }

    // any navigation from inside the menu closes it
    for link in dom::query_all_in(&menu, "a") {
        let toggle_el = toggle.clone();
        let menu_el = menu.clone();
        dom::add_listener(&link, "click", move |_: web::MouseEvent| {
            _ = menu_el.class_list().remove_1(ACTIVE_CLASS);
            _ = toggle_el.class_list().remove_1(ACTIVE_CLASS);
        });
    }
    true
}
