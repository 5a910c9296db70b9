use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::toaster::Toasts;
use crate::{
    contact::{ContactController, ContactFormPayload, EmailRelay, FormHandle},
    relay::RelayError,
};
#[cfg(feature = "ssr")]
use crate::relay::EmailJsClient;

#[server]
pub async fn send_contact(payload: ContactFormPayload) -> Result<(), ServerFnError> {
    let Some(client) = use_context::<EmailJsClient>() else {
        tracing::error!("contact form submitted but the email relay is not configured");
        return Err(ServerFnError::new(RelayError::NotConfigured));
    };
    client.send(&payload).await.map_err(ServerFnError::new)
}

/// Relays through the `send_contact` server function so the EmailJS
/// credentials never reach the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnRelay;

impl EmailRelay for ServerFnRelay {
    async fn send(&self, payload: &ContactFormPayload) -> Result<(), RelayError> {
        send_contact(payload.clone())
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))
    }
}

#[derive(Clone, Copy)]
struct ContactFields {
    form: NodeRef<html::Form>,
    name: NodeRef<html::Input>,
    email: NodeRef<html::Input>,
    message: NodeRef<html::Textarea>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            form: NodeRef::new(),
            name: NodeRef::new(),
            email: NodeRef::new(),
            message: NodeRef::new(),
        }
    }

    /// The rendered form, if every element of it is in the DOM.
    fn mounted(&self) -> Option<MountedForm> {
        Some(MountedForm {
            form: self.form.get_untracked()?,
            name: self.name.get_untracked()?,
            email: self.email.get_untracked()?,
            message: self.message.get_untracked()?,
        })
    }
}

struct MountedForm {
    form: HtmlFormElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    message: HtmlTextAreaElement,
}

impl FormHandle for MountedForm {
    fn payload(&self) -> ContactFormPayload {
        ContactFormPayload {
            from_name: self.name.value(),
            from_email: self.email.value(),
            message: self.message.value(),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = ContactController::new(ServerFnRelay, expect_context::<Toasts>());
    let fields = ContactFields::new();
    let input_class = "w-full bg-black border border-purple-500/40 rounded-lg p-3 outline-none";

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let form = fields.mounted();
        spawn_local(async move {
            let res = controller.submit(form.as_ref()).await;
            log::debug!("contact submission: {res:?}");
        });
    };

    view! {
        <section id="contact">
            <h2 class="title-halo text-3xl mb-10">"Contact"</h2>
            <form node_ref=fields.form on:submit=on_submit class="max-w-xl space-y-6">
                <input
                    node_ref=fields.name
                    name="from_name"
                    type="text"
                    placeholder="Your Name"
                    class=input_class
                />
                <input
                    node_ref=fields.email
                    name="from_email"
                    type="email"
                    placeholder="Your Email"
                    class=input_class
                />
                <textarea
                    node_ref=fields.message
                    name="message"
                    rows=4
                    placeholder="Your Message"
                    class=format!("{input_class} resize-none")
                ></textarea>
                <button
                    type="submit"
                    class="px-6 py-3 rounded-lg border border-purple-500/50 text-purple-400 hover:bg-purple-500/10 transition-all"
                >
                    "Send Message"
                </button>
            </form>
        </section>
    }
}
