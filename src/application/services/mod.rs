pub mod clone_executor;
pub mod group_expander;
pub mod path_resolver;
pub mod platform_detector;

pub use clone_executor::{CloneExecutor, CloneOutcome};
pub use group_expander::GroupExpander;
pub use path_resolver::PathResolver;
pub use platform_detector::PlatformDetector;
