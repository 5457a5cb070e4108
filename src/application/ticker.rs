use std::time::Duration;

use futures::{stream::BoxStream, StreamExt};

use super::conversion_panel::RunId;

/// Emits `run` once per `interval`, `count` times, then ends.
///
/// Dropping the stream (or aborting the task polling it) cancels the
/// remaining ticks.
pub fn progress_ticks(run: RunId, interval: Duration, count: u32) -> BoxStream<'static, RunId> {
    futures::stream::unfold(0u32, move |emitted| async move {
        if emitted >= count {
            return None;
        }
        tokio::time::sleep(interval).await;
        Some((run, emitted + 1))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_emits_count_ticks_on_interval() {
        let start = Instant::now();
        let ticks: Vec<_> = progress_ticks(7, Duration::from_millis(500), 10)
            .collect()
            .await;

        assert_eq!(ticks, vec![7; 10]);
        assert!(start.elapsed() >= Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_interval() {
        let start = Instant::now();
        let mut ticks = progress_ticks(1, Duration::from_millis(500), 3);

        assert_eq!(ticks.next().await, Some(1));
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(start.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_stops_remaining_ticks() {
        let (mut ticks, handle) =
            futures::stream::abortable(progress_ticks(3, Duration::from_millis(500), 10));

        assert_eq!(ticks.next().await, Some(3));
        handle.abort();

        let start = Instant::now();
        assert_eq!(ticks.next().await, None);
        assert!(start.elapsed() < Duration::from_millis(500));
        assert!(ticks.is_aborted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_count_is_empty() {
        let mut ticks = progress_ticks(1, Duration::from_millis(500), 0);
        assert_eq!(ticks.next().await, None);
    }
}
