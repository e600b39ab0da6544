use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::state::chrome::AnimationNode;
use crate::state::site::SiteState;
use crate::ui::actions;
use crate::ui::chrome::{Animations, ScrollTopButton};
use crate::ui::contact::ContactSection;
use crate::ui::gallery::Gallery;
use crate::ui::language_switch::SiteHeader;
use crate::ui::sections::{About, Footer, Hero};

/// Desktop window title, until the translations provide `siteTitle`.
pub const WINDOW_TITLE: &str = env!("CARGO_PKG_NAME");

const STYLES: Asset = asset!("/assets/styles.css");
const HERO_ANIMATION: Asset = asset!("/assets/lottie/hero.json");

/// Animation slots present in the page markup.
pub fn page_animations() -> Vec<AnimationNode> {
    vec![AnimationNode {
        id: "hero-animation".to_string(),
        path: HERO_ANIMATION.to_string(),
    }]
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| {
        SiteState::new(SiteConfig::load_or_default(), None).with_animations(page_animations())
    });

    use_hook(move || spawn(actions::load_translations(state)));

    let lang = use_memo(move || state.read().document().lang.clone());
    use_effect(move || actions::sync_document_lang(&lang.read()));

    let site = state.read();
    let title = site.document().title.clone();

    rsx! {
        document::Stylesheet { href: STYLES }
        if let Some(title) = title {
            document::Title { "{title}" }
        }
        div { class: "page",
            SiteHeader { state }
            main {
                Hero { state }
                About { state }
                Gallery { state }
                ContactSection { state }
            }
            Footer { state }
            ScrollTopButton { state }
            Animations { state }
        }
    }
}
