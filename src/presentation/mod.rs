/// Command line interface
pub mod cli;
