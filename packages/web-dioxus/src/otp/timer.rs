//! One-second ticker driving the resend cooldown

use dioxus::prelude::*;

use super::controller::CodeEntry;

/// Sleep that works on whichever side the component is running
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "server")]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(any(feature = "web", feature = "server")))]
    {
        let _ = ms;
        std::future::pending::<()>().await;
    }
}

/// Tick `entry` once a second until its cooldown reaches zero.
///
/// The task belongs to the calling scope, so it also stops when the
/// component unmounts.
pub fn start_cooldown<const N: usize>(mut entry: Signal<CodeEntry<N>>) -> Task {
    spawn(async move {
        loop {
            sleep_ms(1000).await;
            let still_counting = match entry.try_write() {
                Ok(mut entry) => entry.tick(),
                Err(_) => false,
            };
            if !still_counting {
                break;
            }
        }
    })
}

/// Stop the running ticker and start a fresh one
pub fn restart_cooldown<const N: usize>(
    entry: Signal<CodeEntry<N>>,
    mut ticker: Signal<Option<Task>>,
) {
    cancel_cooldown(ticker);
    ticker.set(Some(start_cooldown(entry)));
}

pub fn cancel_cooldown(ticker: Signal<Option<Task>>) {
    if let Ok(task) = ticker.try_peek() {
        if let Some(task) = *task {
            task.cancel();
        }
    }
}
