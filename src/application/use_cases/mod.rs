pub mod clone_repositories;
