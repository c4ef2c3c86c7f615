//! User page: users fetched inline on every request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/user`. Bypasses the TTL cache and blocks the response until the
//! listing resolves, so there is no loading placeholder. A failed fetch fails
//! the whole response with a 500.

use leptos::prelude::*;

use crate::components::user_list::UserCard;
use crate::services::CatalogService;

use super::FailedRender;

#[component]
pub fn UserPage() -> impl IntoView {
    let catalog = expect_context::<CatalogService>();
    let failure = FailedRender::from_context();
    let users = async move { catalog.get_users_fresh().await.inspect_err(|err| failure.report("users", err)) };

    view! {
        <div class="page page--user">
            <h1 class="page__title">"Users, rendered on request"</h1>
            <Await future=users blocking=true let:users>
                {users.clone().map(|users| {
                    users.into_iter().map(|user| view! { <UserCard user/> }).collect::<Vec<_>>()
                })}
            </Await>
        </div>
    }
}
