use futures::future::{self, Either};
use std::{fmt, future::Future, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed(pub Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no response within {} ms", self.0.as_millis())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Resolves to the future's output, or `Elapsed` if `duration` passes first.
/// The losing future is dropped, which cancels an in-flight request.
pub async fn with_timeout<F: Future>(duration: Duration, fut: F) -> Result<F::Output, Elapsed> {
    let fut = Box::pin(fut);
    let delay = Box::pin(sleep(duration));
    match future::select(fut, delay).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed(duration)),
    }
}
