//! Order submission flow.
//!
//! The flow is a small state machine: idle until a submission starts,
//! in-flight while the email send is outstanding, then back to idle with
//! the result reported to the caller. Re-entry while in-flight is
//! rejected so double-clicks cannot produce concurrent duplicate sends.
//!
//! There is no retry and no idempotency key: if a request times out
//! after the email was actually delivered, a user retry sends a second
//! order email. That duplicate-order risk is accepted and left for a
//! product decision.
//!
//! On a confirmed send the cart is cleared; on failure it is left intact
//! so the user can retry without re-entering items.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use streamline_essentials_core::order::{OrderRequest, OrderValidationError};

use crate::services::emailjs::{EmailError, Mailer, OrderEmail};
use crate::store::SharedCart;

/// Observable submission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No submission outstanding.
    #[default]
    Idle,
    /// A send is on the wire; further submissions are rejected.
    InFlight,
}

/// Failures surfaced to the order form. All are recoverable.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("your cart is empty")]
    EmptyCart,

    #[error("an order is already being sent")]
    AlreadyInFlight,

    #[error("failed to send order")]
    Send(#[source] EmailError),
}

/// Coordinates validation, the in-flight guard, email delivery, and
/// cart clearing.
pub struct OrderService {
    mailer: Arc<dyn Mailer>,
    in_flight: AtomicBool,
}

impl OrderService {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self {
            mailer,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The current submission state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::SeqCst) {
            SubmissionState::InFlight
        } else {
            SubmissionState::Idle
        }
    }

    /// Submit the order built from the current cart.
    ///
    /// # Errors
    ///
    /// - [`OrderError::EmptyCart`] when there is nothing to order
    /// - [`OrderError::AlreadyInFlight`] when a send is outstanding
    /// - [`OrderError::Send`] when the email service rejects the send;
    ///   the cart is left intact so the user can retry
    pub async fn submit(&self, cart: &SharedCart, order: &OrderRequest) -> Result<(), OrderError> {
        let snapshot = cart.snapshot();
        if snapshot.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(OrderError::AlreadyInFlight);
        }
        let _reset = ResetOnDrop(&self.in_flight);

        let email = OrderEmail::compose(order, &snapshot.lines, snapshot.subtotal);
        tracing::info!(
            customer = %order.name,
            order_type = %order.fulfillment.label(),
            items = snapshot.lines.len(),
            "Submitting order"
        );

        self.mailer
            .send_order(&email)
            .await
            .map_err(OrderError::Send)?;

        cart.clear();
        Ok(())
    }
}

/// Returns the flow to idle when the submission completes or unwinds.
struct ResetOnDrop<'a>(&'a AtomicBool);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
