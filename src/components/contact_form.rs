use leptos::html::{Input, Textarea};
use leptos::prelude::*;

use crate::contact::{FormStatus, Submission};

/// Front-end-only contact form. Validation happens entirely in the
/// page; nothing is ever transmitted. On success the fields reset, on
/// failure they are left exactly as typed.
#[component]
pub fn ContactForm() -> impl IntoView {
    let status = RwSignal::new(FormStatus::Idle);

    let name_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();
    let message_ref = NodeRef::<Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (Some(name), Some(email), Some(message)) =
            (name_ref.get(), email_ref.get(), message_ref.get())
        else {
            return;
        };

        match Submission::parse(&name.value(), &email.value(), &message.value()) {
            Ok(_submission) => {
                status.set(FormStatus::Accepted);
                name.set_value("");
                email.set_value("");
                message.set_value("");
            }
            Err(_) => status.set(FormStatus::Invalid),
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Contact"</h2>
            <form id="contact-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input type="text" name="name" node_ref=name_ref />
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" node_ref=email_ref />
                </label>
                <label>
                    "Message"
                    <textarea name="message" rows="5" node_ref=message_ref></textarea>
                </label>
                <button type="submit">"Send Message"</button>
                <p id="form-status" class=move || status.get().css_class()>
                    {move || status.get().message()}
                </p>
            </form>
        </section>
    }
}
