pub mod entry;
pub mod insight;
