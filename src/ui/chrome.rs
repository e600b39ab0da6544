use dioxus::prelude::*;

use crate::state::chrome::AnimationNode;
use crate::state::site::SiteState;
use crate::ui::actions;

#[component]
pub fn ScrollTopButton(state: Signal<SiteState>) -> Element {
    use_hook(move || spawn(actions::watch_scroll(state)));

    let site = state.read();
    let visible = site.scroll_top.visible();
    let label = site.text_or("ui.scrollTop", "Volver arriba");

    rsx! {
        button {
            class: if visible { "scroll-top visible" } else { "scroll-top" },
            r#type: "button",
            "data-scroll-top": "",
            "aria-label": "{label}",
            onclick: move |_| actions::scroll_to_top(),
            "\u{2191}"
        }
    }
}

/// Kicks off the animation player once per page.
#[component]
pub fn Animations(state: Signal<SiteState>) -> Element {
    use_hook(move || spawn(actions::start_animations(state)));
    rsx! {}
}

#[component]
pub fn AnimationSlot(node: AnimationNode) -> Element {
    rsx! {
        div {
            id: "{node.id}",
            class: "lottie",
            "data-lottie": "{node.path}",
            "aria-hidden": "true",
        }
    }
}
