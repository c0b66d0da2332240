pub mod clone_options;
pub mod clone_plan;
pub mod workspace_config;

pub use clone_options::CloneOptions;
pub use clone_plan::ClonePlan;
pub use workspace_config::WorkspaceConfig;
