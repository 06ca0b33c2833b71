use leptos::prelude::*;

use crate::router::DEFAULT_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found-page">
            <h1>"Page not found."</h1>
            <a href=DEFAULT_PATH>"Back to the vault"</a>
        </section>
    }
}
