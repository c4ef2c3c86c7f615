//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure views over already-resolved catalog records. Pages own
//! the fetching and hand finished listings down as props.

pub mod course_list;
pub mod nav_menu;
pub mod spinner;
pub mod user_list;
