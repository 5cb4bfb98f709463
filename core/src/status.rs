// glucoin/core/src/status.rs

//! Status presentation lookup tables.
//!
//! These are deliberately not state machines: the backend owns every
//! transition, the client only translates the status it was handed into a
//! label, a color pair, an icon name, and the set of actions the screen may
//! offer. A status this client version does not recognize presents exactly
//! like `Processing` so a newer backend never crashes an older client.

use crate::models::booking::BookingStatus;
use crate::models::order::{Order, OrderStatus, PaymentStatus};
use serde::Serialize;

/// What a status badge renders: label text, foreground/background colors
/// (hex), and an icon name from the app's icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
  pub label: &'static str,
  pub color: &'static str,
  pub background_color: &'static str,
  pub icon: &'static str,
}

/// Mutating actions a detail screen may offer for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderAction {
  /// Open the hosted-checkout redirect. Only offered while payment is due
  /// and the backend supplied a redirect URL.
  PayNow,
  Cancel,
  ConfirmReceipt,
}

impl OrderAction {
  /// Button copy as the original screens render it.
  pub fn label(&self) -> &'static str {
    match self {
      OrderAction::PayNow => "Bayar Sekarang",
      OrderAction::Cancel => "Batalkan",
      OrderAction::ConfirmReceipt => "Pesanan Diterima",
    }
  }
}

impl OrderStatus {
  pub fn presentation(&self) -> StatusPresentation {
    match self {
      OrderStatus::PendingPayment => StatusPresentation {
        label: "Menunggu Pembayaran",
        color: "#B45309",
        background_color: "#FEF3C7",
        icon: "clock",
      },
      OrderStatus::Shipped => StatusPresentation {
        label: "Dalam Pengiriman",
        color: "#6D28D9",
        background_color: "#EDE9FE",
        icon: "truck",
      },
      OrderStatus::Delivered => StatusPresentation {
        label: "Telah Sampai",
        color: "#047857",
        background_color: "#D1FAE5",
        icon: "home",
      },
      OrderStatus::Completed => StatusPresentation {
        label: "Selesai",
        color: "#0F766E",
        background_color: "#CCFBF1",
        icon: "check-circle",
      },
      OrderStatus::Cancelled => StatusPresentation {
        label: "Dibatalkan",
        color: "#B91C1C",
        background_color: "#FEE2E2",
        icon: "x-circle",
      },
      // Forward compatibility: anything we do not know renders as in-progress.
      OrderStatus::Processing | OrderStatus::Unknown => StatusPresentation {
        label: "Diproses",
        color: "#1D4ED8",
        background_color: "#DBEAFE",
        icon: "package",
      },
    }
  }

  /// The actions a detail screen may offer for this status.
  /// `has_redirect_url` gates PayNow: without a hosted-checkout URL there is
  /// nothing to open.
  pub fn allowed_actions(&self, has_redirect_url: bool) -> Vec<OrderAction> {
    match self {
      OrderStatus::PendingPayment => {
        let mut actions = Vec::with_capacity(2);
        if has_redirect_url {
          actions.push(OrderAction::PayNow);
        }
        actions.push(OrderAction::Cancel);
        actions
      }
      OrderStatus::Processing => vec![OrderAction::Cancel],
      OrderStatus::Delivered => vec![OrderAction::ConfirmReceipt],
      _ => Vec::new(),
    }
  }
}

impl Order {
  /// Convenience over [`OrderStatus::allowed_actions`] that reads the payment
  /// redirect off the order itself.
  pub fn allowed_actions(&self) -> Vec<OrderAction> {
    self.status.allowed_actions(self.payment.snap_redirect_url.is_some())
  }
}

impl BookingStatus {
  pub fn presentation(&self) -> StatusPresentation {
    match self {
      BookingStatus::PendingPayment => StatusPresentation {
        label: "Menunggu Pembayaran",
        color: "#B45309",
        background_color: "#FEF3C7",
        icon: "clock",
      },
      BookingStatus::Confirmed => StatusPresentation {
        label: "Terkonfirmasi",
        color: "#047857",
        background_color: "#D1FAE5",
        icon: "calendar-check",
      },
      BookingStatus::Completed => StatusPresentation {
        label: "Selesai",
        color: "#0F766E",
        background_color: "#CCFBF1",
        icon: "check-circle",
      },
      BookingStatus::Cancelled => StatusPresentation {
        label: "Dibatalkan",
        color: "#B91C1C",
        background_color: "#FEE2E2",
        icon: "x-circle",
      },
      BookingStatus::Expired => StatusPresentation {
        label: "Kedaluwarsa",
        color: "#6B7280",
        background_color: "#F3F4F6",
        icon: "clock-off",
      },
      BookingStatus::Pending | BookingStatus::Unknown => StatusPresentation {
        label: "Menunggu Konfirmasi",
        color: "#1D4ED8",
        background_color: "#DBEAFE",
        icon: "hourglass",
      },
    }
  }

  /// Cancellation is only meaningful while the consultation has not happened.
  pub fn can_cancel(&self) -> bool {
    matches!(
      self,
      BookingStatus::PendingPayment | BookingStatus::Pending | BookingStatus::Confirmed
    )
  }
}

impl PaymentStatus {
  pub fn presentation(&self) -> StatusPresentation {
    match self {
      PaymentStatus::Paid => StatusPresentation {
        label: "Lunas",
        color: "#047857",
        background_color: "#D1FAE5",
        icon: "check-circle",
      },
      PaymentStatus::Failed => StatusPresentation {
        label: "Gagal",
        color: "#B91C1C",
        background_color: "#FEE2E2",
        icon: "x-circle",
      },
      PaymentStatus::Expired => StatusPresentation {
        label: "Kedaluwarsa",
        color: "#6B7280",
        background_color: "#F3F4F6",
        icon: "clock-off",
      },
      PaymentStatus::Pending | PaymentStatus::Unknown => StatusPresentation {
        label: "Menunggu Pembayaran",
        color: "#B45309",
        background_color: "#FEF3C7",
        icon: "clock",
      },
    }
  }
}
