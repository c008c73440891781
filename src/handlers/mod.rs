pub mod insight;
pub mod logs;
pub mod root;
