mod post;
mod term;

pub use post::{CreatePost, Post, PostStatus, PostWithTerms, UpdatePost};
pub use term::{CreateTerm, Term, TermKind, TermWithCount, UpdateTerm};
