use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation linking the four pages.
#[component]
pub fn NavMenu() -> impl IntoView {
    view! {
        <nav class="nav-menu">
            <A href="/">"Home"</A>
            <A href="/user">"Users"</A>
            <A href="/about">"About"</A>
            <A href="/course">"Courses"</A>
        </nav>
    }
}
