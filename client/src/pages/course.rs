//! Course page: cached user cards followed by the course grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/course` with partially-blocked SSR. The user listing comes from
//! the TTL cache and is rendered in the document flow before the response head
//! is flushed. The course listing is fetched fresh on every render and streams
//! in behind a `Suspense` whose fallback is the `Spinner`.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch resolves the resource to `Err(ApiError)` and no partial
//! list is shown. A user failure fails the whole response with a 500, since
//! that listing resolves before the head is sent. A course failure streams
//! after the head, so it is logged and its region is left empty.

use leptos::prelude::*;

use crate::components::course_list::CourseList;
use crate::components::spinner::Spinner;
use crate::components::user_list::UserList;
use crate::net::error::ApiError;
use crate::services::CatalogService;

use super::FailedRender;

#[component]
pub fn CoursePage() -> impl IntoView {
    let catalog = expect_context::<CatalogService>();

    let users_catalog = catalog.clone();
    let failure = FailedRender::from_context();
    let users = Resource::new_blocking(
        || (),
        move |()| {
            let catalog = users_catalog.clone();
            let failure = failure.clone();
            async move { catalog.get_users().await.inspect_err(|err| failure.report("users", err)) }
        },
    );

    let courses = Resource::new(
        || (),
        move |()| {
            let catalog = catalog.clone();
            async move { catalog.get_courses().await }
        },
    );

    view! {
        <div class="page page--course">
            <Suspense>
                {move || Suspend::new(async move {
                    users.await.map(|users| view! { <UserList users/> })
                })}
            </Suspense>

            <Suspense fallback=|| view! { <Spinner/> }>
                {move || Suspend::new(async move {
                    courses
                        .await
                        .inspect_err(log_failure("courses"))
                        .map(|courses| view! { <CourseList courses/> })
                })}
            </Suspense>
        </div>
    }
}

fn log_failure(listing: &'static str) -> impl Fn(&ApiError) {
    move |err| {
        tracing::warn!(
            listing,
            code = err.error_code(),
            upstream_status = ?err.status(),
            error = %err,
            "streamed listing fetch failed"
        );
    }
}
