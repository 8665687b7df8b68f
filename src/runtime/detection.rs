// ABOUTME: Runtime detection logic for the local system.
// ABOUTME: Honors explicit config, otherwise checks Podman sockets first, then Docker.

use super::types::{RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect the container runtime on the local system.
///
/// Detection order:
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
pub fn detect_local() -> Result<RuntimeInfo, DetectionError> {
    detect_with(|path| Path::new(path).exists())
}

/// Detect the runtime, letting explicit configuration take precedence.
///
/// A configured runtime type wins outright; its socket defaults to the
/// well-known path for that runtime. A socket without a runtime type is
/// ignored.
pub fn detect_runtime(config: Option<&RuntimeConfig>) -> Result<RuntimeInfo, DetectionError> {
    if let Some(cfg) = config
        && let Some(runtime_type) = cfg.runtime
    {
        let socket_path = cfg
            .socket
            .clone()
            .unwrap_or_else(|| default_socket_path(runtime_type));
        tracing::debug!(%runtime_type, %socket_path, "using configured runtime");
        return Ok(RuntimeInfo {
            runtime_type,
            socket_path,
        });
    }

    detect_local()
}

fn detect_with(exists: impl Fn(&str) -> bool) -> Result<RuntimeInfo, DetectionError> {
    // 1. Rootless Podman
    if let Some(uid) = get_uid() {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if exists(&rootless_socket) {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            });
        }
    }

    // 2. Rootful Podman
    if exists(ROOTFUL_PODMAN) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        });
    }

    // 3. Docker
    if exists(DOCKER_SOCKET) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => ROOTFUL_PODMAN.to_string(),
    }
}
