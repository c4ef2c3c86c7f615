use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <h1 class="page__title">"About"</h1>
            <p>"Course and user listings are served from a mock REST API."</p>
        </div>
    }
}
