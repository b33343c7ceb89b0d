pub mod link_header;
pub mod listing_kind;
