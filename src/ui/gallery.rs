use dioxus::prelude::*;

use crate::state::gallery::GalleryView;
use crate::state::site::SiteState;
use crate::ui::text::Text;

struct TriggerButton {
    index: usize,
    label: String,
    active: bool,
}

#[component]
pub fn Gallery(state: Signal<SiteState>) -> Element {
    let site = state.read();
    let triggers: Vec<TriggerButton> = site
        .gallery_buttons()
        .into_iter()
        .map(|index| TriggerButton {
            index,
            label: site
                .text(&format!("gallery.items.{index}.name"))
                .map(str::to_string)
                .unwrap_or_else(|| format!("{:02}", index + 1)),
            active: site.gallery.is_active(index),
        })
        .collect();
    // Before the first render the panel shows the empty markup state.
    let view = site.gallery.view().cloned().unwrap_or_else(|| GalleryView {
        stack_hidden: true,
        ..GalleryView::default()
    });

    rsx! {
        section { id: "gallery", class: "gallery",
            h2 {
                Text { state, i18n: "gallery.title", fallback: "Proyectos" }
            }
            div { class: "gallery-triggers", role: "tablist",
                for trigger in triggers {
                    button {
                        key: "{trigger.index}",
                        class: if trigger.active { "gallery-btn active" } else { "gallery-btn" },
                        r#type: "button",
                        "data-gallery-trigger": "{trigger.index}",
                        "aria-pressed": "{trigger.active}",
                        onclick: {
                            let index = trigger.index;
                            move |_| {
                                let mut state = state;
                                state.with_mut(|site| site.select_gallery(index));
                            }
                        },
                        "{trigger.label}"
                    }
                }
            }
            article { class: "gallery-panel",
                span { class: "gallery-tag", "data-gallery-tag": "", "{view.tag}" }
                h3 { "data-gallery-title": "", "{view.title}" }
                p { "data-gallery-description": "", "{view.description}" }
                div {
                    class: "gallery-stack",
                    role: "list",
                    "data-gallery-stack": "",
                    hidden: view.stack_hidden,
                    for (position, chip) in view.stack.iter().enumerate() {
                        span { key: "{position}", class: "stack-chip", role: "listitem",
                            if let Some(icon) = &chip.icon {
                                img { src: "{icon}", alt: "{chip.label}", "loading": "lazy" }
                            }
                            span { "{chip.label}" }
                        }
                    }
                }
                a {
                    class: "gallery-link",
                    "data-gallery-link": "",
                    href: "{view.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{view.link_label}"
                }
            }
        }
    }
}
