use leptos::prelude::*;

/// Loading indicator shown while a listing is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <span class="spinner__dot"></span>
        </div>
    }
}
