// src/gui/router.rs
use super::pages::{ self, Page };

/// Sidebar order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::upload::PAGE,
    &pages::dashboard::PAGE,
    &pages::regulations::PAGE,
    &pages::updates::PAGE,
    &pages::tasks::PAGE,
    &pages::oncoming::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

