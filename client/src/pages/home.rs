use leptos::prelude::*;

/// Landing page at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1 class="page__title">"Classroom"</h1>
            <p>"Browse the course catalog and the people teaching it."</p>
        </div>
    }
}
