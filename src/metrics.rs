use lazy_static::lazy_static;
use prometheus::{Counter, register_counter};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "translate_requests_total",
        "Total number of translation requests"
    )
    .unwrap();
    pub static ref CHUNKS_FORWARDED: Counter = register_counter!(
        "translate_chunks_forwarded_total",
        "Total chunks relayed to clients"
    )
    .unwrap();
    pub static ref STREAMS_CANCELED: Counter = register_counter!(
        "translate_streams_canceled_total",
        "Streams ended early by client disconnect"
    )
    .unwrap();
    pub static ref STREAM_FAILURES: Counter = register_counter!(
        "translate_stream_failures_total",
        "Streams ended early by a backend error"
    )
    .unwrap();
}
