//! Constants used across the dockhand workspace.

/// The compose binary invoked in project directories unless the
/// configuration overrides it.
pub const COMPOSE_PROGRAM: &str = "docker-compose";

/// Directory below the working directory that holds the registry.
pub const CONFIG_DIR: &str = ".config/dockhand";

/// Filename of the project registry.
pub const CONFIG_FILE: &str = "dockhand.json";
