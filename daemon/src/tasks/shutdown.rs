use tokio_util::sync::CancellationToken;

use crate::prelude::*;

/// Cancels `shutdown` on Ctrl-C. Returns early if something else cancels first.
pub async fn watch_ctrl_c(shutdown: CancellationToken) {
    tokio::select! {
        res = tokio::signal::ctrl_c() => match res {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                shutdown.cancel();
            }
            Err(e) => error!("Error listening for Ctrl-C: {e}"),
        },
        _ = shutdown.cancelled() => {}
    }
}
