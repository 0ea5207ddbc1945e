//! Payment page: order summary, mock card form, and confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached by redirect from basket checkout. The summary is re-read from
//! storage after hydration; confirmation records the order, clears the
//! basket, and sends the visitor home after a short delay.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use shop::money::format_price;
use shop::payment::{self, OrderSummary, PaymentDetails};

use crate::config;
use crate::state::shop::ShopState;
use crate::util::{clock, delay, nav, notice, storage};

/// One form field: input id, label, and input type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
}

pub const FIELDS: [Field; 7] = [
    Field { id: "fullName", label: "Full name", kind: "text" },
    Field { id: "email", label: "Email", kind: "email" },
    Field { id: "phone", label: "Phone", kind: "tel" },
    Field { id: "cardName", label: "Name on card", kind: "text" },
    Field { id: "cardNumber", label: "Card number", kind: "text" },
    Field { id: "expiry", label: "Expiry (MM/YY)", kind: "text" },
    Field { id: "cvv", label: "CVV", kind: "text" },
];

/// Build form details from values listed in [`FIELDS`] order.
pub fn details_from(values: &[String; 7]) -> PaymentDetails {
    let [full_name, email, phone, card_name, card_number, expiry, cvv] = values.clone();
    PaymentDetails {
        full_name,
        email,
        phone,
        card_name,
        card_number,
        expiry,
        cvv,
    }
}

/// `Name x qty` with its line total, per summary line.
pub fn summary_rows(summary: &OrderSummary) -> Vec<(String, String)> {
    summary
        .lines
        .iter()
        .map(|line| (format!("{} x {}", line.name, line.quantity), format_price(line.line_total())))
        .collect()
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();

    let summary = RwSignal::new(OrderSummary::default());
    Effect::new(move || summary.set(payment::summary(&storage::store())));

    let values: [RwSignal<String>; 7] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let confirmed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if confirmed.get_untracked() {
            return;
        }
        let details = details_from(&values.map(|v| v.get_untracked()));
        match payment::confirm(&storage::store(), &details, &clock::now_label()) {
            Ok(_) => {
                confirmed.set(true);
                shop.update(|s| s.basket.reload());
                delay::after(config::PAYMENT_REDIRECT, || nav::redirect("/"));
            }
            Err(e) => notice::alert(&e.to_string()),
        }
    };

    let inputs = FIELDS
        .iter()
        .zip(values)
        .map(|(field, value)| {
            view! {
                <label class="payment-form__field">
                    <span>{field.label}</span>
                    <input
                        id=field.id
                        type=field.kind
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="payment-page">
            <h1>"Payment"</h1>
            <p class="payment-page__service">
                "Service: "
                <strong>{move || summary.with(|s| s.service.label())}</strong>
            </p>

            <div class="order-summary">
                <h2>"Your Order"</h2>
                <Show
                    when=move || summary.with(|s| !s.is_empty())
                    fallback=|| view! { <p>"Your basket was empty."</p> }
                >
                    {move || {
                        summary
                            .with(summary_rows)
                            .into_iter()
                            .map(|(label, price)| view! { <p class="order-summary__row"><span>{label}</span><span>{price}</span></p> })
                            .collect_view()
                    }}
                </Show>
                <p class="order-summary__total">
                    "Total: "
                    <strong>{move || summary.with(|s| format_price(s.total))}</strong>
                </p>
            </div>

            <form class="payment-form" on:submit=on_submit>
                {inputs}
                <button class="btn btn--primary" type="submit">"Confirm payment"</button>
            </form>

            <Show when=move || confirmed.get()>
                <p class="payment-page__confirm">
                    "✅ Payment confirmed! Your ramen is on its way. Returning to the home page..."
                </p>
            </Show>
        </section>
    }
}
