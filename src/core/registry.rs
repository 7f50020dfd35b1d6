//! Process-wide wrapper registry.
//!
//! Callers share one [`ExchangeWrapper`] per registry instead of each
//! constructing their own. The first `get_or_init` caller pays for
//! construction (including the network round trip that validates the
//! pair whitelist); everyone after that gets the same `Arc`, and their
//! configuration argument is ignored. A failed construction leaves the
//! registry empty so a later call can retry with a fixed configuration.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::core::config::WrapperConfig;
use crate::core::errors::ExchangeError;
use crate::core::wrapper::ExchangeWrapper;

pub struct ExchangeRegistry {
    cell: OnceCell<Arc<ExchangeWrapper>>,
}

impl ExchangeRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// The registry shared by the whole process.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: ExchangeRegistry = ExchangeRegistry::new();
        &GLOBAL
    }

    /// Return the shared wrapper, constructing it from `config` if this
    /// is the first call.
    pub async fn get_or_init(
        &self,
        config: &WrapperConfig,
    ) -> Result<Arc<ExchangeWrapper>, ExchangeError> {
        self.get_or_init_with(|| ExchangeWrapper::new(config)).await
    }

    /// Like [`get_or_init`](Self::get_or_init) with a caller-supplied
    /// constructor. Concurrent first calls race safely: exactly one
    /// constructor runs, the rest wait for its outcome.
    pub async fn get_or_init_with<F, Fut>(
        &self,
        init: F,
    ) -> Result<Arc<ExchangeWrapper>, ExchangeError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ExchangeWrapper, ExchangeError>>,
    {
        self.cell
            .get_or_try_init(|| async { init().await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    /// The shared wrapper, if some caller already initialized it.
    #[must_use]
    pub fn get(&self) -> Option<Arc<ExchangeWrapper>> {
        self.cell.get().cloned()
    }

    #[must_use]
    pub fn initialized(&self) -> bool {
        self.cell.initialized()
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
