//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`. If the process can respond to HTTP at
/// all, it is alive — this handler intentionally has no dependencies.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`. The store is in-process memory, so there is
/// no dependency to gate on — ready as soon as the listener is up.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
