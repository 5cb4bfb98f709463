// glucoin/core/src/actions.rs

//! Order/booking action dispatch: one user action becomes one REST call
//! followed by an unconditional re-fetch of the affected entity, so local
//! state is always replaced by server truth rather than merged. A rejected
//! request changes nothing and is surfaced as-is; retries are manual.

use crate::api::{dashboard, marketplace};
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::models::booking::Booking;
use crate::models::order::Order;
use crate::status::OrderAction;
use tracing::{info, instrument};

/// What dispatching an order action yields.
#[derive(Debug, Clone)]
pub enum OrderActionOutcome {
  /// The entity was mutated server-side; this is its fresh snapshot.
  Updated(Order),
  /// Nothing was mutated: the caller should open this hosted-checkout URL.
  Redirect(String),
}

/// Dispatches `action` for `order`. An action the current status does not
/// allow is rejected as a validation error before any network traffic.
#[instrument(skip(client, order), fields(order_id = %order.id, status = ?order.status), err(Display))]
pub async fn dispatch_order_action(
  client: &ApiClient,
  order: &Order,
  action: OrderAction,
) -> ClientResult<OrderActionOutcome> {
  if !order.allowed_actions().contains(&action) {
    return Err(ClientError::Validation(format!(
      "Aksi {:?} tidak tersedia untuk status pesanan saat ini.",
      action
    )));
  }

  match action {
    OrderAction::PayNow => {
      // allowed_actions already guaranteed the URL is present.
      let url = order
        .payment
        .snap_redirect_url
        .clone()
        .ok_or_else(|| ClientError::Validation("Tautan pembayaran tidak tersedia.".to_string()))?;
      Ok(OrderActionOutcome::Redirect(url))
    }
    OrderAction::Cancel => {
      marketplace::cancel_order(client, order.id).await?;
      let fresh = marketplace::get_order(client, order.id).await?;
      info!(new_status = ?fresh.status, "Order cancelled and re-fetched.");
      Ok(OrderActionOutcome::Updated(fresh))
    }
    OrderAction::ConfirmReceipt => {
      marketplace::confirm_delivery(client, order.id).await?;
      let fresh = marketplace::get_order(client, order.id).await?;
      info!(new_status = ?fresh.status, "Delivery confirmed and order re-fetched.");
      Ok(OrderActionOutcome::Updated(fresh))
    }
  }
}

/// Cancels a booking and re-fetches it. Same contract as order actions:
/// status gate first, then call, then an unconditional re-fetch.
#[instrument(skip(client, booking), fields(booking_id = %booking.id, status = ?booking.status), err(Display))]
pub async fn cancel_booking(client: &ApiClient, booking: &Booking) -> ClientResult<Booking> {
  if !booking.status.can_cancel() {
    return Err(ClientError::Validation(
      "Konsultasi ini tidak dapat dibatalkan lagi.".to_string(),
    ));
  }
  dashboard::cancel_booking(client, booking.id).await?;
  let fresh = dashboard::get_booking(client, booking.id).await?;
  info!(new_status = ?fresh.status, "Booking cancelled and re-fetched.");
  Ok(fresh)
}
