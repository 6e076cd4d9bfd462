//! Test helpers
//!
//! Mock implementations of the provider and window seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::dispatcher::{GuiFrontend, WindowEvents};
use crate::error::{CoreError, CoreResult, LookupError};
use crate::services::AddressProvider;
use crate::types::{AddressResult, ExitStatus, WindowContent};

// ===== MockAddressProvider =====

pub struct MockAddressProvider {
    private: AddressResult,
    public: AddressResult,
    /// Delay before the private lookup answers (to reorder completion)
    private_delay: Duration,
    pub private_calls: AtomicUsize,
    pub public_calls: AtomicUsize,
}

impl MockAddressProvider {
    pub fn new(private: AddressResult, public: AddressResult) -> Self {
        Self {
            private,
            public,
            private_delay: Duration::ZERO,
            private_calls: AtomicUsize::new(0),
            public_calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(private: &str, public: &str) -> Self {
        Self::new(Ok(private.to_string()), Ok(public.to_string()))
    }

    pub fn public_failing(error: LookupError) -> Self {
        Self::new(Ok("192.168.1.10".to_string()), Err(error))
    }

    #[must_use]
    pub fn with_private_delay(mut self, delay: Duration) -> Self {
        self.private_delay = delay;
        self
    }

    pub fn calls(&self) -> (usize, usize) {
        (
            self.private_calls.load(Ordering::SeqCst),
            self.public_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl AddressProvider for MockAddressProvider {
    async fn private_address(&self) -> AddressResult {
        self.private_calls.fetch_add(1, Ordering::SeqCst);
        if !self.private_delay.is_zero() {
            tokio::time::sleep(self.private_delay).await;
        }
        self.private.clone()
    }

    async fn public_address(&self) -> AddressResult {
        self.public_calls.fetch_add(1, Ordering::SeqCst);
        self.public.clone()
    }
}

// ===== FakeFrontend =====

/// User actions the fake window replays in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeAction {
    PressF1,
    SelectHelpMenu,
    Close,
}

#[derive(Default)]
pub struct FakeFrontend {
    pub script: Vec<FakeAction>,
    pub shown: Option<WindowContent>,
    pub help_texts: Vec<String>,
    /// If set, `run` fails with this message
    pub fail_with: Option<String>,
}

impl FakeFrontend {
    pub fn with_script(script: Vec<FakeAction>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }
}

impl GuiFrontend for FakeFrontend {
    fn run(
        &mut self,
        content: &WindowContent,
        events: &mut dyn WindowEvents,
    ) -> CoreResult<ExitStatus> {
        if let Some(msg) = &self.fail_with {
            return Err(CoreError::Frontend(msg.clone()));
        }
        self.shown = Some(content.clone());
        for action in self.script.clone() {
            match action {
                FakeAction::PressF1 | FakeAction::SelectHelpMenu => {
                    self.help_texts.push(events.help().to_string());
                }
                FakeAction::Close => return Ok(events.exit()),
            }
        }
        // Window closed by the window manager
        Ok(events.exit())
    }
}
