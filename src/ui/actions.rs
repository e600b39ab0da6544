use dioxus::prelude::*;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::io::contact_io::{self, ContactError};
use crate::io::translations_io;
use crate::state::chrome::{AnimationNode, LoaderStart};
use crate::state::site::SiteState;

/// Reports scroll offsets: once immediately, then on every scroll event.
const SCROLL_WATCH_JS: &str = r#"
dioxus.send(window.scrollY);
window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
"#;

/// Script reporting whether the `lottie` global exists, then reporting once
/// more after the player script at `player_src` has loaded or failed. With
/// no script to load, the second report is `false`.
pub fn player_bootstrap_js(player_src: Option<&str>) -> String {
    let load = match player_src {
        Some(src) => format!(
            r#"const script = document.createElement('script');
  script.src = {src};
  script.async = true;
  script.onload = () => dioxus.send(!!window.lottie);
  script.onerror = () => dioxus.send(false);
  document.head.appendChild(script);"#,
            src = Value::from(src),
        ),
        None => "dioxus.send(false);".to_string(),
    };
    format!(
        r#"
dioxus.send(!!window.lottie);
if (!window.lottie) {{
  {load}
}}
"#
    )
}

pub async fn load_translations(mut state: Signal<SiteState>) {
    let source = match state.read().config().translation_source() {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "cannot resolve translations resource");
            return;
        }
    };

    let client = Client::new();
    match translations_io::load(&client, &source).await {
        Ok(raw) => state.with_mut(|site| site.install_translations(raw)),
        Err(err) => state.read().translations_failed(&err),
    }
}

/// One submission. Overlapping submissions are independent; whichever
/// finishes last decides the status shown.
pub async fn submit_contact(mut state: Signal<SiteState>) {
    let (payload, endpoint) = state.with_mut(|site| {
        let payload = site.begin_contact_submit();
        (payload, site.config().contact_url())
    });

    let outcome = match endpoint {
        Ok(url) => contact_io::post_contact(&Client::new(), &url, &payload).await,
        Err(err) => Err(ContactError::from(err)),
    };
    state.with_mut(|site| site.finish_contact_submit(outcome));
}

pub async fn watch_scroll(mut state: Signal<SiteState>) {
    let mut watcher = document::eval(SCROLL_WATCH_JS);
    while let Ok(offset) = watcher.recv::<f64>().await {
        let changed = {
            let site = state.peek();
            site.scroll_top.visible_at(offset) != site.scroll_top.visible()
        };
        if changed {
            state.with_mut(|site| site.scroll_top.on_scroll(offset));
        }
    }
}

pub fn scroll_to_top() {
    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

pub fn sync_document_lang(lang: &str) {
    document::eval(&format!(
        "document.documentElement.lang = {};",
        Value::from(lang)
    ));
}

pub async fn start_animations(mut state: Signal<SiteState>) {
    let player = state.read().config().ui.animation_player.clone();
    let mut bootstrap = document::eval(&player_bootstrap_js(player.as_deref()));
    let Ok(available) = bootstrap.recv::<bool>().await else {
        return;
    };

    let nodes = match state.with_mut(|site| site.animations.start(available)) {
        LoaderStart::Ready(nodes) => nodes,
        LoaderStart::Deferred => {
            let Ok(available) = bootstrap.recv::<bool>().await else {
                return;
            };
            state.with_mut(|site| site.animations.on_load_signal(available))
        }
    };

    for node in &nodes {
        play_animation(node);
    }
}

fn play_animation(node: &AnimationNode) {
    debug!(id = %node.id, path = %node.path, "starting animation");
    document::eval(&format!(
        r#"
const node = document.getElementById({id});
if (node && window.lottie) {{
  window.lottie.loadAnimation({{ container: node, renderer: 'svg', loop: true, autoplay: true, path: {path} }});
  node.dataset.lottieLoaded = 'true';
}}
"#,
        id = Value::from(node.id.as_str()),
        path = Value::from(node.path.as_str()),
    ));
}
