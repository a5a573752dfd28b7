//! Scripted balance source for cache tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::balance::BalanceSource;
use crate::error::BalanceError;

/// Answers from a script of `Some(satoshis)` / `None` (failure), then from
/// the fallback once the script runs out.
#[derive(Debug)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Option<u64>>>,
    fallback: Option<u64>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn always(satoshis: u64) -> Arc<Self> {
        Self::build(Vec::new(), Some(satoshis))
    }

    pub fn failing() -> Arc<Self> {
        Self::build(Vec::new(), None)
    }

    pub fn sequence(script: Vec<Option<u64>>) -> Arc<Self> {
        Self::build(script, None)
    }

    fn build(script: Vec<Option<u64>>, fallback: Option<u64>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceSource for ScriptedSource {
    async fn fetch_satoshis(&self, _address: &str) -> Result<u64, BalanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback);
        next.ok_or(BalanceError::Status(503))
    }
}
