pub mod accordion;
pub mod navbar;
pub mod section;
