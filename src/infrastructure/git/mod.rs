pub mod cloner;

pub use cloner::{BasicAuth, GitCloneError, GitCloner, Git2Cloner};
