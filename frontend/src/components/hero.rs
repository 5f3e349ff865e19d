//! Hero section component

use labsimplify::presenter::{TAGLINE, TITLE};
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{TITLE}</h1>
            <p class="subtitle">{TAGLINE}</p>
        </div>
    }
}
