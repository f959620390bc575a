#[cfg(feature = "http_gateway")]
pub(crate) mod http;
#[cfg(feature = "tokio_timer")]
pub(crate) mod timers;
