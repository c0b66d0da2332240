//! # heimdall - Repository cloning helper
//!
//! `heimdall` clones git repositories into a local directory tree whose layout
//! mirrors the remote URL. A whole GitLab group or GitHub organization can be
//! cloned in one go.
//!
//! ## Features
//!
//! - **URL-shaped layout**: `https://gitlab.com/acme/api` lands in `<work dir>/acme/api`
//! - **Hostname in path**: optionally prefix the path with the (suffix-stripped) hostname
//! - **Group clones**: list a group / organization through the platform API and clone every member
//! - **Token lookup**: per-host tokens from the configuration file or environment variables
//!
//! ## Quick Start
//!
//! ```bash
//! heimdall git-clone https://github.com/acme/api
//! heimdall gc -i -g https://gitlab.com/acme/platform
//! ```
//!
//! Optional configuration (`<config dir>/heimdall/heimdall.yml`):
//!
//! ```yaml
//! work_dir: /home/me/work
//! platforms:
//!   - hostname: gitlab.acme.io
//!     type: gitlab
//!     token: env.ACME_GITLAB_TOKEN
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: URL references, clone options and plans
//! - [`application`]: Path resolution, platform detection, group expansion and the clone use case
//! - [`infrastructure`]: Configuration, libgit2 cloning and platform listing APIs
//! - [`presentation`]: CLI interface
//! - [`common`]: Errors, logging and the user-facing reporter
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use heimdall::application::services::platform_detector::PlatformDetector;
//! use heimdall::application::use_cases::clone_repositories::CloneRepositoriesUseCase;
//! use heimdall::common::reporter::ConsoleReporter;
//! use heimdall::domain::entities::{CloneOptions, WorkspaceConfig};
//! use heimdall::domain::value_objects::RepositoryReference;
//! use heimdall::infrastructure::config::ConfiguredTokens;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let use_case = CloneRepositoriesUseCase::new(
//!     WorkspaceConfig::new("/tmp/work", "/tmp/logs"),
//!     CloneOptions::new().with_include_hostname(true),
//!     PlatformDetector::new(),
//!     Arc::new(ConfiguredTokens::new()),
//!     Arc::new(ConsoleReporter::new(false)),
//! );
//!
//! let url = RepositoryReference::parse("https://github.com/acme/api")?;
//! let summary = use_case.execute(&url).await?;
//! println!("{} cloned", summary.cloned);
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::HeimdallError;
pub use crate::common::result::HeimdallResult as Result;
