//! Stored payment cards.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn BankCardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page bank-card-page">
            <h1>"Bank cards"</h1>
            <p>"Card numbers, holders, and expiry dates."</p>
        </section>
    }
}
