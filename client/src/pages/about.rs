//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About Ichiraku"</h1>
            <p>
                "Teuchi has been pulling noodles at the same counter for decades. Every bowl starts from a broth "
                "simmered overnight and noodles cut fresh each morning."
            </p>
            <p>"Ayame runs the front of house. If it is your first visit, ask her for the miso chashu."</p>
        </section>
    }
}
