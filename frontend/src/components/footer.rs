//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Built to make medical information more accessible"</p>
        </footer>
    }
}
