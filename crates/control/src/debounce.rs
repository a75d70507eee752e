//! Trailing-edge debounce for value streams
//!
//! Coalesces bursts of values into the latest one: a value is delivered
//! only after the input has been quiet for the whole window. Used to
//! throttle per-keystroke validation feedback.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

/// Default buffer size for the output channel.
const OUTPUT_CAPACITY: usize = 1;

/// Debounces a channel: each incoming value supersedes the pending one
/// and restarts the quiet window; the pending value is delivered once
/// the window elapses without new input.
///
/// When the input channel closes, the pending value (if any) is flushed
/// and the output closes. Must be called within a tokio runtime.
pub fn debounce<T: Send + 'static>(
    mut input: mpsc::Receiver<T>,
    window: Duration,
) -> mpsc::Receiver<T> {
    let (tx, output) = mpsc::channel(OUTPUT_CAPACITY);

    tokio::spawn(async move {
        let mut pending: Option<T> = None;
        let mut deadline = Instant::now();

        loop {
            match pending.take() {
                Some(value) => {
                    tokio::select! {
                        next = input.recv() => match next {
                            Some(superseding) => {
                                pending = Some(superseding);
                                deadline = Instant::now() + window;
                            }
                            None => {
                                // input closed: flush the pending value
                                let _ = tx.send(value).await;
                                break;
                            }
                        },
                        () = sleep_until(deadline) => {
                            if tx.send(value).await.is_err() {
                                break;
                            }
                        }
                    }
                }
                None => match input.recv().await {
                    Some(value) => {
                        pending = Some(value);
                        deadline = Instant::now() + window;
                    }
                    None => break,
                },
            }
        }
    });

    output
}
