//! # Retail Search Repository
//!
//! This crate provides the client side of a boosted product search: a
//! remote client interface with a Retail API implementation, a request
//! builder for boost conditions, diagnostic renderings, and the invoker that
//! ties them together.

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod interfaces;
pub mod invoker;
pub mod retail;

pub use builder::{boosted_search_request, BoostedSearchRequestBuilder};
pub use config::RetailSearchConfig;
pub use errors::SearchError;
pub use interfaces::{SearchPages, SearchServiceClient};
pub use invoker::SearchInvoker;
pub use retail::RetailHttpClient;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::subscriber::DefaultGuard;

    /// Log output captured on the current thread while this value is alive.
    pub(crate) struct LogCapture {
        buffer: Arc<Mutex<Vec<u8>>>,
        _guard: DefaultGuard,
    }

    impl LogCapture {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
        }
    }

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn capture_logs() -> LogCapture {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = buffer.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || BufferWriter(writer.clone()))
            .finish();

        LogCapture {
            buffer,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
