use dioxus::prelude::*;

use crate::state::site::SiteState;
use crate::ui::app::page_animations;
use crate::ui::chrome::AnimationSlot;
use crate::ui::text::Text;

#[component]
pub fn Hero(state: Signal<SiteState>) -> Element {
    rsx! {
        section { id: "top", class: "hero",
            div { class: "hero-copy",
                p { class: "hero-greeting",
                    Text { state, i18n: "hero.greeting", fallback: "Hola, soy" }
                }
                h1 {
                    Text { state, i18n: "hero.name", fallback: "Andrey Villalobos Gómez" }
                }
                p { class: "hero-role",
                    Text { state, i18n: "hero.role", fallback: "Desarrollador de software" }
                }
                a { class: "hero-cta", href: "#gallery",
                    Text { state, i18n: "hero.cta", fallback: "Ver proyectos" }
                }
            }
            for node in page_animations() {
                AnimationSlot { key: "{node.id}", node }
            }
        }
    }
}

#[component]
pub fn About(state: Signal<SiteState>) -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 {
                Text { state, i18n: "about.title", fallback: "Sobre mí" }
            }
            p {
                Text {
                    state,
                    i18n: "about.body",
                    fallback: "Construyo aplicaciones web y herramientas con foco en rendimiento y claridad.",
                }
            }
        }
    }
}

#[component]
pub fn Footer(state: Signal<SiteState>) -> Element {
    rsx! {
        footer { class: "site-footer",
            p {
                "© Andrey Villalobos Gómez. "
                Text { state, i18n: "footer.rights", fallback: "Todos los derechos reservados." }
            }
        }
    }
}
