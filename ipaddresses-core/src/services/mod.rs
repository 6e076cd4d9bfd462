//! Address lookup services.
//!
//! [`AddressProvider`] is the only seam that touches the OS resolver or the
//! network. Both lookups return an [`AddressResult`]; failures never escape
//! as errors, so one failed lookup cannot hide the other.

mod private_ip;
mod public_ip;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::CoreResult;
use crate::types::AddressResult;

pub use private_ip::resolve_host;
pub use public_ip::{interpret_response, PublicIpClient};

/// Source of the two addresses shown to the user.
///
/// Implementations:
/// - [`SystemAddressProvider`]: OS resolver + HTTP echo service
/// - test doubles returning canned results
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Address of this machine on the local network.
    async fn private_address(&self) -> AddressResult;

    /// Address of this machine (or its network edge) on the internet.
    async fn public_address(&self) -> AddressResult;
}

/// Production provider.
#[derive(Debug, Clone)]
pub struct SystemAddressProvider {
    public: PublicIpClient,
}

impl SystemAddressProvider {
    pub fn new(public: PublicIpClient) -> Self {
        Self { public }
    }

    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        Ok(Self::new(PublicIpClient::from_config(config)?))
    }
}

#[async_trait]
impl AddressProvider for SystemAddressProvider {
    async fn private_address(&self) -> AddressResult {
        let result = private_ip::private_address().await;
        if let Err(e) = &result {
            log::warn!("Private address lookup failed: {e}");
        }
        result
    }

    async fn public_address(&self) -> AddressResult {
        let result = self.public.fetch().await;
        if let Err(e) = &result {
            log::warn!("Public address lookup via {} failed: {e}", self.public.endpoint());
        }
        result
    }
}
