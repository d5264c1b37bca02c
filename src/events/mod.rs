pub mod form;
pub mod menu;
pub mod pointer;
pub mod scroll;

pub use form::wire_contact_form;
pub use menu::wire_mobile_menu;
pub use pointer::{wire_buttons, wire_card_hover, wire_tooltips};
pub use scroll::{apply_stagger, wire_lazy_images, wire_parallax, wire_reveal, wire_smooth_scroll};
