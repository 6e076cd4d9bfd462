//! Private address lookup: local host name → first IPv4 address.

use std::net::IpAddr;

use crate::error::LookupError;
use crate::types::AddressResult;

/// Resolve the address this machine is known by on the local network.
pub async fn private_address() -> AddressResult {
    let name = local_hostname()?;
    resolve_host(&name).await
}

/// Read the OS host name.
fn local_hostname() -> Result<String, LookupError> {
    let raw = hostname::get()
        .map_err(|e| LookupError::Resolution(format!("Cannot read host name: {e}")))?;
    raw.into_string().map_err(|raw| {
        LookupError::Resolution(format!("Host name is not valid UTF-8: {raw:?}"))
    })
}

/// Resolve `name` through the system resolver and return its first IPv4
/// address.
pub async fn resolve_host(name: &str) -> AddressResult {
    let name = name.trim();
    if name.is_empty() {
        return Err(LookupError::Resolution("Host name is empty".to_string()));
    }

    log::debug!("Resolving local host name {name:?}");

    let addrs = tokio::net::lookup_host((name, 0))
        .await
        .map_err(|e| LookupError::Resolution(format!("Failed to resolve {name}: {e}")))?;

    addrs
        .map(|addr| addr.ip())
        .find(IpAddr::is_ipv4)
        .map(|ip| ip.to_string())
        .ok_or_else(|| LookupError::Resolution(format!("No IPv4 address for {name}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn numeric_host_resolves_to_itself() {
        assert_eq!(resolve_host("127.0.0.1").await.unwrap(), "127.0.0.1");
    }

    #[tokio::test]
    async fn localhost_resolves_to_loopback() {
        let ip = resolve_host("localhost").await.unwrap();
        assert!(ip.starts_with("127."), "{ip}");
    }

    #[tokio::test]
    async fn empty_name_is_resolution_error() {
        assert!(matches!(
            resolve_host("   ").await,
            Err(LookupError::Resolution(_))
        ));
    }

    #[tokio::test]
    async fn ipv6_only_name_is_resolution_error() {
        assert!(matches!(
            resolve_host("::1").await,
            Err(LookupError::Resolution(_))
        ));
    }

    #[tokio::test]
    #[ignore = "depends on the host's resolver configuration"]
    async fn own_host_name_resolves() {
        let ip = private_address().await.unwrap();
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok(), "{ip}");
    }
}
