//! Cancelable periodic tick source.
//!
//! A background thread waits on a stop channel with the tick interval as
//! timeout. Each timeout sends one tick to the owning thread and calls the
//! optional waker so an idle event loop wakes up to consume it. The owner
//! never shares state with the thread beyond the two channels.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Callback invoked from the ticker thread after every tick.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Handle to a running ticker. Dropping it stops the thread.
pub struct RefreshTicker {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTicker {
    /// Spawns the ticker thread. The first tick arrives one `interval` from now.
    pub fn spawn(interval: Duration, waker: Option<Waker>) -> Self {
        let (tick_sender, ticks) = channel();
        let (stop, stop_receiver) = channel::<()>();

        let handle = thread::spawn(move || loop {
            match stop_receiver.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick_sender.send(()).is_err() {
                        break;
                    }
                    if let Some(waker) = &waker {
                        waker();
                    }
                }
                // An explicit stop message or the handle going away
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Consumes all ticks delivered so far and returns how many there were.
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Stops the thread and waits for it to exit. Undelivered ticks are discarded.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender disconnects the channel and wakes the thread
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[test]
    fn test_ticks_are_delivered() {
        let ticker = RefreshTicker::spawn(Duration::from_millis(10), None);
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut received = 0;
        while received < 3 && Instant::now() < deadline {
            received += ticker.drain();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(received >= 3, "expected at least 3 ticks, got {}", received);
        ticker.stop();
    }

    #[test]
    fn test_waker_called_per_tick() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let waker: Waker = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let ticker = RefreshTicker::spawn(Duration::from_millis(10), Some(waker));
        let deadline = Instant::now() + Duration::from_secs(5);
        while wakes.load(Ordering::SeqCst) < 2 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        ticker.stop();
        assert!(wakes.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn test_stop_before_first_tick() {
        let ticker = RefreshTicker::spawn(Duration::from_secs(60), None);
        let started = Instant::now();
        assert_eq!(ticker.drain(), 0);
        ticker.stop();
        // Stopping must not wait for the interval to elapse
        assert!(started.elapsed() < Duration::from_secs(30));
    }
}
