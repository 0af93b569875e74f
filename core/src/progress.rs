//! Byte-counted upload progress for multipart submissions.

use bytes::Bytes;
use futures_util::Stream;
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Callback invoked with an upload percentage in `0..=100`. Reported values
/// never decrease and reach 100 when the last payload byte is handed to the
/// transport, not when the response arrives.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

const CHUNK_SIZE: usize = 64 * 1024;

/// Shared byte accounting across all tracked parts of one upload.
pub(crate) struct UploadCounter {
    total: u64,
    sent: AtomicU64,
    on_progress: ProgressFn,
}

impl UploadCounter {
    pub(crate) fn new(total: u64, on_progress: ProgressFn) -> Arc<Self> {
        Arc::new(Self {
            total,
            sent: AtomicU64::new(0),
            on_progress,
        })
    }

    fn record(&self, bytes: usize) {
        let sent = self.sent.fetch_add(bytes as u64, Ordering::Relaxed) + bytes as u64;
        let percent = if self.total == 0 {
            100
        } else {
            (sent.min(self.total) * 100 / self.total) as u8
        };
        (self.on_progress)(percent);
    }
}

/// Stream adapter that yields a payload in fixed-size chunks, recording each
/// chunk against the shared counter as it is handed to the transport.
pub(crate) struct TrackedPayload {
    data: Bytes,
    offset: usize,
    counter: Arc<UploadCounter>,
}

impl TrackedPayload {
    pub(crate) fn new(data: Bytes, counter: Arc<UploadCounter>) -> Self {
        Self {
            data,
            offset: 0,
            counter,
        }
    }
}

impl Stream for TrackedPayload {
    type Item = Result<Bytes, io::Error>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.offset >= this.data.len() {
            return Poll::Ready(None);
        }
        let end = (this.offset + CHUNK_SIZE).min(this.data.len());
        let chunk = this.data.slice(this.offset..end);
        this.counter.record(chunk.len());
        this.offset = end;
        Poll::Ready(Some(Ok(chunk)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::Mutex;

    fn collecting_callback() -> (ProgressFn, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ProgressFn = Arc::new(move |percent| sink.lock().unwrap().push(percent));
        (callback, seen)
    }

    #[tokio::test]
    async fn payload_reports_monotone_percentages_ending_at_100() {
        let data = Bytes::from(vec![7u8; CHUNK_SIZE * 2 + CHUNK_SIZE / 2]);
        let (callback, seen) = collecting_callback();
        let counter = UploadCounter::new(data.len() as u64, callback);
        let mut stream = TrackedPayload::new(data, counter);

        let mut yielded = 0usize;
        while let Some(chunk) = stream.next().await {
            yielded += chunk.unwrap().len();
        }
        assert_eq!(yielded, CHUNK_SIZE * 2 + CHUNK_SIZE / 2);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(*seen.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn counter_spans_multiple_parts() {
        let first = Bytes::from(vec![0u8; CHUNK_SIZE]);
        let second = Bytes::from(vec![0u8; CHUNK_SIZE]);
        let (callback, seen) = collecting_callback();
        let counter = UploadCounter::new((CHUNK_SIZE * 2) as u64, callback);

        let mut stream = TrackedPayload::new(first, Arc::clone(&counter));
        while stream.next().await.is_some() {}
        let mut stream = TrackedPayload::new(second, counter);
        while stream.next().await.is_some() {}

        assert_eq!(*seen.lock().unwrap(), vec![50, 100]);
    }
}
