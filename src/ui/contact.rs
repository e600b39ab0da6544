use dioxus::prelude::*;

use crate::state::site::SiteState;
use crate::ui::actions;
use crate::ui::text::Text;

#[component]
pub fn ContactSection(state: Signal<SiteState>) -> Element {
    let site = state.read();
    let status = site.contact.status().as_str();
    let message = site.contact.message().unwrap_or_default().to_string();

    rsx! {
        section { id: "contact", class: "contact",
            h2 {
                Text { state, i18n: "contact.title", fallback: "Contacto" }
            }
            p {
                Text {
                    state,
                    i18n: "contact.intro",
                    fallback: "¿Tienes un proyecto en mente? Escríbeme.",
                }
            }
            form {
                id: "contact-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    spawn(actions::submit_contact(state));
                },
                ContactField { state, name: "name", i18n: "contact.form.name", fallback: "Nombre", kind: "text" }
                ContactField { state, name: "email", i18n: "contact.form.email", fallback: "Correo", kind: "email" }
                ContactField {
                    state,
                    name: "message",
                    i18n: "contact.form.message",
                    fallback: "Mensaje",
                    kind: "textarea",
                }
                button { r#type: "submit", class: "contact-submit",
                    Text { state, i18n: "contact.form.submit", fallback: "Enviar" }
                }
            }
            p {
                class: "contact-status",
                role: "status",
                "aria-live": "polite",
                "data-contact-status": "",
                "data-state": status,
                "{message}"
            }
        }
    }
}

#[component]
fn ContactField(
    state: Signal<SiteState>,
    name: &'static str,
    i18n: &'static str,
    fallback: &'static str,
    kind: &'static str,
) -> Element {
    let value = state.read().contact.field(name).to_string();
    let id = format!("contact-{name}");
    let oninput = move |evt: FormEvent| {
        let mut state = state;
        state.with_mut(|site| site.contact.set_field(name, evt.value()));
    };

    rsx! {
        label { r#for: "{id}",
            Text { state, i18n, fallback }
        }
        if kind == "textarea" {
            textarea { id: "{id}", name: name, required: true, rows: "5", value: "{value}", oninput: oninput }
        } else {
            input { id: "{id}", name: name, r#type: kind, required: true, value: "{value}", oninput: oninput }
        }
    }
}
