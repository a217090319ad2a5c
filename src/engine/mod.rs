mod distance_api;

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::api::API;

/// Runs distance calculations, either inline on the calling task or on a
/// bounded set of blocking worker threads.
#[derive(Debug, Default)]
pub struct Engine {
    workers: Option<Arc<Semaphore>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new(workers: usize) -> Self {
        let workers = match workers {
            0 => None,
            n => Some(Arc::new(Semaphore::new(n))),
        };

        Self { workers }
    }

    pub fn inline() -> Self {
        Self::default()
    }

    pub fn is_pooled(&self) -> bool {
        self.workers.is_some()
    }
}

impl API for Engine {}
