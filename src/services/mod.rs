pub mod filters;
pub mod posts;
pub mod search;
pub mod seed;
pub mod slug;
pub mod terms;
