//! Stored binary blobs such as keys and certificates.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn BinaryDataPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page binary-data-page">
            <h1>"Binary data"</h1>
            <p>"Keys, certificates, and other files."</p>
        </section>
    }
}
