// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::tidy::PAGE,
    &pages::city_skill::PAGE,
    &pages::skill_role::PAGE,
    &pages::recommendations::PAGE,
    &pages::heatmap::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
