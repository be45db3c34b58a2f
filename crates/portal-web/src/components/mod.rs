//! Leptos UI components

mod header;

pub use header::{badge_label, nav_links, Header, NavLink};
