mod health;
mod info;
mod metrics;
mod translate;

pub use health::health_handler;
pub use info::info_handler;
pub use metrics::metrics_handler;
pub use translate::translate_handler;
