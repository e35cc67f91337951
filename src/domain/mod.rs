pub mod dict;
pub mod fuzzy;
