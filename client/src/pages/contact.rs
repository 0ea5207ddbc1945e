//! Contact page with the support form.
//!
//! Messages are not sent anywhere. Every submission shows a confirmation
//! banner and clears the form once the banner hides.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::config;
use crate::util::delay;

/// Who a support message is from, for the log line.
pub fn sender_label(email: &str) -> &str {
    match email.trim() {
        "" => "anonymous",
        email => email,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("support message from {}", email.with_untracked(|e| sender_label(e).to_owned()));
        sent.set(true);
        delay::after(config::SUPPORT_BANNER_VISIBLE, move || {
            sent.set(false);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        });
    };

    view! {
        <section class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Ichiraku Ramen, Konoha High Street. Open daily 11:00 to 22:00."</p>

            <Show when=move || sent.get()>
                <p class="contact-page__banner">"✅ Thanks! Our team will get back to you shortly."</p>
            </Show>

            <form class="support-form" on:submit=on_submit>
                <label>
                    <span>"Name"</span>
                    <input
                        id="supportName"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    <span>"Email"</span>
                    <input
                        id="supportEmail"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    <span>"Message"</span>
                    <textarea
                        id="supportMessage"
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </section>
    }
}

