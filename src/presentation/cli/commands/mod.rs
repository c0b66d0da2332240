pub mod git_clone;

pub use git_clone::*;
