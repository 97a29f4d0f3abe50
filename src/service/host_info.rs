use chrono::Local;
use sysinfo::System;

/// Placeholder for any value the host cannot provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// What the page reports about the serving container and the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    pub server_ip: String,
    pub client_ip: String,
    pub runtime: String,
    pub timestamp: String,
}

impl HostInfo {
    pub fn collect(hostname: &str, server_ip: Option<String>, client_ip: Option<String>) -> Self {
        Self {
            hostname: hostname.to_string(),
            server_ip: server_ip.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            client_ip: client_ip.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            runtime: runtime_version(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// The local hostname, or [`NOT_AVAILABLE`].
pub fn hostname() -> String {
    System::host_name().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn runtime_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_addresses_fall_back_to_placeholder() {
        let info = HostInfo::collect("web-2", None, Some("172.18.0.9".to_string()));
        assert_eq!(info.hostname, "web-2");
        assert_eq!(info.server_ip, NOT_AVAILABLE);
        assert_eq!(info.client_ip, "172.18.0.9");
        assert!(info.runtime.starts_with("lb-demo "));
    }

    #[test]
    fn timestamp_has_second_precision() {
        let info = HostInfo::collect("h", None, None);
        assert!(chrono::NaiveDateTime::parse_from_str(&info.timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
