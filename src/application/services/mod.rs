pub mod catalog_builder;
pub mod pagination;
