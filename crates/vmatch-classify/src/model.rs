//! Process-wide model handle.
//!
//! The classifier model is loaded once at startup and held for the
//! page's lifetime. A failed load is not cached: the next
//! user-initiated attempt may try again.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::{ClassifierClient, ClassifierConfig};
use crate::error::ClassifyResult;

static MODEL: OnceCell<Arc<ClassifierClient>> = OnceCell::const_new();

/// Load the global model handle, or return the already-loaded one.
pub async fn load_global(config: ClassifierConfig) -> ClassifyResult<Arc<ClassifierClient>> {
    MODEL
        .get_or_try_init(|| async { ClassifierClient::load(config).await.map(Arc::new) })
        .await
        .cloned()
}

/// The loaded model handle, if any. `None` until a
/// [`load_global`] call has succeeded.
pub fn global() -> Option<Arc<ClassifierClient>> {
    MODEL.get().cloned()
}
