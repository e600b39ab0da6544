use dioxus::prelude::*;

use crate::state::site::SiteState;
use crate::ui::text::Text;

#[component]
pub fn SiteHeader(state: Signal<SiteState>) -> Element {
    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "#top",
                Text { state, i18n: "nav.brand", fallback: "Andrey Villalobos" }
            }
            nav { class: "site-nav",
                a { href: "#gallery",
                    Text { state, i18n: "nav.projects", fallback: "Proyectos" }
                }
                a { href: "#contact",
                    Text { state, i18n: "nav.contact", fallback: "Contacto" }
                }
            }
            LanguageSwitch { state }
            CvButton { state }
        }
    }
}

#[component]
pub fn LanguageSwitch(state: Signal<SiteState>) -> Element {
    let site = state.read();
    let current = site.current_lang().to_string();
    let label = site.text_or("nav.language", "Idioma").to_string();
    let buttons: Vec<(String, bool)> = site
        .config()
        .languages
        .iter()
        .map(|lang| (lang.clone(), site.is_active_language(lang)))
        .collect();

    rsx! {
        div {
            class: "lang-switch",
            role: "group",
            "aria-label": "{label}",
            "data-active-lang": "{current}",
            for (lang, active) in buttons {
                button {
                    key: "{lang}",
                    class: if active { "lang-btn active" } else { "lang-btn" },
                    r#type: "button",
                    "data-lang": "{lang}",
                    "aria-pressed": "{active}",
                    onclick: {
                        let lang = lang.clone();
                        move |_| {
                            let mut state = state;
                            state.with_mut(|site| site.set_language(&lang));
                        }
                    },
                    "{lang.to_uppercase()}"
                }
            }
        }
    }
}

#[component]
pub fn CvButton(state: Signal<SiteState>) -> Element {
    let site = state.read();
    let Some(cv) = site.cv_link().cloned() else {
        return rsx! {};
    };

    rsx! {
        a {
            class: "cv-btn",
            "data-cv-btn": "",
            href: "{cv.href}",
            download: "{cv.download}",
            "hreflang": "{cv.hreflang}",
            Text { state, i18n: "nav.cv", fallback: "Descargar CV" }
        }
    }
}
