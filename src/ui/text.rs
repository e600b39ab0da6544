use dioxus::prelude::*;

use crate::state::site::SiteState;

/// A translatable text node. Shows the current language's value for `i18n`,
/// or `fallback` (the authored markup text) when there is none or it is empty.
#[component]
pub fn Text(state: Signal<SiteState>, i18n: &'static str, fallback: &'static str) -> Element {
    let site = state.read();
    let text = site.text_or(i18n, fallback);
    rsx! { "{text}" }
}
