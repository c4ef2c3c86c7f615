//! User cards rendered from an already-resolved listing.

use leptos::prelude::*;

use crate::net::types::User;

/// Grid of user cards, one per record, keyed by record id.
#[component]
pub fn UserList(users: Vec<User>) -> impl IntoView {
    view! {
        <section class="user-list">
            <h2 class="user-list__title">"All users"</h2>
            <div class="user-list__grid">
                {users.into_iter().map(|user| view! { <UserCard user/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Single user card showing name and bio.
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    view! {
        <article class="user-card" data-key={user.id}>
            <h3 class="user-card__name">{user.name}</h3>
            <p class="user-card__bio">{user.bio}</p>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "user_list_test.rs"]
mod user_list_test;
