//! Host platform capabilities

/// Capabilities of the machine running the command.
///
/// Resolved once at startup and passed into the stage plan builder so
/// the pipeline never queries the operating system mid-run.
#[derive(Debug, Clone, Copy)]
pub struct HostPlatform {
    /// Whether generated projects need a CocoaPods link step.
    ///
    /// Only macOS hosts can build the iOS side of a React Native
    /// project, so `pod-install` is pointless anywhere else.
    pub needs_pod_install: bool,
}

impl HostPlatform {
    /// Detect the capabilities of the current host.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            needs_pod_install: cfg!(target_os = "macos"),
        }
    }
}
