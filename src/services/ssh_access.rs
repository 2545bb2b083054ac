//! SSH availability probe backed by the system `ssh` client.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::domain::AccessMode;
use crate::ports::AccessProbe;

/// Marker the forge prints on successful authentication. `ssh -T` against a
/// git host exits non-zero even when authenticated, so the exit code alone
/// says nothing.
const AUTH_SUCCESS_MARKER: &str = "successfully authenticated";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct SshAccessProbe {
    timeout: Duration,
}

impl SshAccessProbe {
    pub fn new() -> Self {
        Self { timeout: DEFAULT_TIMEOUT }
    }

    #[cfg(test)]
    fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Combined stdout+stderr of the probe, or `None` on spawn failure or
    /// timeout. A timed-out probe is killed and reaped before returning.
    fn probe(&self, host: &str) -> Option<String> {
        let target = format!("git@{host}");
        let mut child = Command::new("ssh")
            .args(["-T", target.as_str(), "-o", "StrictHostKeyChecking=no"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .ok()?;

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(_)) => break,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return None;
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(_) => return None,
            }
        }

        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            let _ = stdout.read_to_string(&mut output);
        }
        if let Some(mut stderr) = child.stderr.take() {
            let _ = stderr.read_to_string(&mut output);
        }
        Some(output)
    }
}

impl Default for SshAccessProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessProbe for SshAccessProbe {
    fn resolve(&self, host: &str) -> AccessMode {
        match self.probe(host) {
            Some(output) if output.contains(AUTH_SUCCESS_MARKER) => AccessMode::Ssh,
            _ => AccessMode::Https,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An unresolvable host must fall back to HTTPS, never error. The probe
    /// either fails fast (no `ssh`, DNS error) or gets cut off by the
    /// shortened timeout.
    #[test]
    fn unreachable_host_falls_back_to_https() {
        let probe = SshAccessProbe::with_timeout(Duration::from_millis(300));
        assert_eq!(probe.resolve("host.invalid"), AccessMode::Https);
    }
}
