use tracing::info;

use crate::state::AppState;

/// Any provider notification may change availability, so everything goes.
pub fn flush_cache(state: &AppState) {
    info!("provider webhook received, invalidating cached availability");
    state.cache.flush_all();
}
