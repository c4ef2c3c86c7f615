//! Root application component with routing and the HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_menu::NavMenu;
use crate::pages::{about::AboutPage, course::CoursePage, home::HomePage, user::UserPage};

/// HTML shell rendered on the server around every route.
///
/// Pages are server-rendered only, so no hydration scripts are emitted.
pub fn shell(_options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Expects a `CatalogService` in context; the server provides one per request.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Classroom"/>

        <Router>
            <NavMenu/>
            <main class="content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("user") view=UserPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("course") view=CoursePage ssr=SsrMode::PartiallyBlocked/>
                </Routes>
            </main>
        </Router>
    }
}
