//! User-facing success notifications.
//!
//! The storefront shows a toast when a product lands in the cart. From the
//! engine's side that is a fire-and-forget sink: the message is handed
//! off, and whatever the sink does with it cannot affect cart state. The
//! trait is infallible by construction; implementations absorb their own
//! faults.

use tracing::info;

/// A fire-and-forget sink for user-visible notifications.
pub trait NotificationSink {
    /// Deliver a success message (e.g. "Enamel Mug added to cart").
    fn success(&self, message: &str);
}

/// Notifier that emits messages through `tracing`.
///
/// The default when no real toast surface is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn success(&self, message: &str) {
        info!(target: "driftwood_cart::toast", "{message}");
    }
}

/// Notifier that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NotificationSink for NullNotifier {
    fn success(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifiers_accept_messages() {
        // Smoke test: neither sink panics or returns anything observable.
        LogNotifier.success("Enamel Mug added to cart");
        NullNotifier.success("Enamel Mug added to cart");
    }
}
