//! Not found page component
//!
//! A 404 page for any path other than the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section not-found">
            <div class="container container--narrow">
                <h1 class="section-title">"404"</h1>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <A href="/" attr:class="btn btn--primary">
                    "Back to Envirie"
                </A>
            </div>
        </section>
    }
}
