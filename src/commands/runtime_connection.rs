// ABOUTME: Shared helper for connecting to the local container runtime.
// ABOUTME: Detects Docker or Podman, connects, and checks the daemon answers.

use srcd_engine::config::Config;
use srcd_engine::error::Result;
use srcd_engine::runtime::{BollardRuntime, RuntimeError, RuntimeInfoTrait, detect_runtime};

/// Connect to the container runtime on this machine.
///
/// This handles the common pattern of:
/// 1. Detecting the runtime type and socket path
/// 2. Establishing the connection
/// 3. Pinging the daemon so failures surface before any real work
pub async fn connect_to_runtime(config: &Config) -> Result<BollardRuntime> {
    let runtime_info =
        detect_runtime(Some(&config.runtime_config())).map_err(RuntimeError::from)?;

    tracing::debug!(
        "found {} at {}",
        runtime_info.runtime_type,
        runtime_info.socket_path
    );

    let runtime = BollardRuntime::connect(&runtime_info).map_err(RuntimeError::from)?;
    runtime.ping().await.map_err(RuntimeError::from)?;

    Ok(runtime)
}
