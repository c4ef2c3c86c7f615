//! Course grid rendered from an already-resolved listing.
//!
//! DESIGN
//! ======
//! Pure view: no fetching, no error handling. Fetch failures surface at the
//! enclosing `Suspense` before this component is ever built.

use leptos::prelude::*;

use crate::net::types::Course;
use crate::util::format::format_price;

/// Grid of course cards, one per record, keyed by record id.
#[component]
pub fn CourseList(courses: Vec<Course>) -> impl IntoView {
    view! {
        <section class="course-list">
            <h2 class="course-list__title">"All courses"</h2>
            <div class="course-list__grid">
                {courses
                    .into_iter()
                    .map(|course| view! { <CourseCard course/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Single course card showing title and price.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let price = format_price(course.price);

    view! {
        <article class="course-card" data-key={course.id}>
            <h3 class="course-card__title">{course.title}</h3>
            <span class="badge course-card__price">{price}</span>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "course_list_test.rs"]
mod course_list_test;
