//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_contribuinte--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector, paste into IDE search, and you land in the module.

/// List of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Use-case / action page (bulk upload).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Navigation page (home).
pub const PAGE_CAT_NAVIGATION: &str = "navigation";

/// Module not built yet, or unknown route.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_USECASE,
    PAGE_CAT_NAVIGATION,
    PAGE_CAT_PLACEHOLDER,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
