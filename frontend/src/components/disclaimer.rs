//! Medical disclaimer banner

use labsimplify::presenter::DISCLAIMER;
use leptos::*;

/// Medical disclaimer, visible whatever the upload state.
#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <div class="disclaimer">
            <p>{DISCLAIMER}</p>
        </div>
    }
}
