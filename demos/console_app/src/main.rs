// glucoin/demos/console_app/src/main.rs

//! Console walk-through of the Glucoin client SDK.
//!
//! Always prints the status presentation tables; when `GLUCOIN_API_BASE_URL`
//! points at a live backend and a session exists, it also fetches the catalog
//! and the caller's orders.

use anyhow::Result;
use glucoin_client::api::marketplace::{self, ProductQuery};
use glucoin_client::models::booking::BookingStatus;
use glucoin_client::models::order::OrderStatus;
use glucoin_client::{ApiClient, ClientConfig};
use tracing::{info, warn, Level};

const ORDER_STATUSES: [OrderStatus; 7] = [
  OrderStatus::PendingPayment,
  OrderStatus::Processing,
  OrderStatus::Shipped,
  OrderStatus::Delivered,
  OrderStatus::Completed,
  OrderStatus::Cancelled,
  OrderStatus::Unknown,
];

const BOOKING_STATUSES: [BookingStatus; 7] = [
  BookingStatus::PendingPayment,
  BookingStatus::Pending,
  BookingStatus::Confirmed,
  BookingStatus::Completed,
  BookingStatus::Cancelled,
  BookingStatus::Expired,
  BookingStatus::Unknown,
];

fn print_status_tables() {
  println!("Order statuses:");
  for status in ORDER_STATUSES {
    let p = status.presentation();
    let actions: Vec<&str> = status.allowed_actions(true).iter().map(|a| a.label()).collect();
    println!(
      "  {:?}: \"{}\" fg={} bg={} icon={} actions=[{}]",
      status,
      p.label,
      p.color,
      p.background_color,
      p.icon,
      actions.join(", ")
    );
  }

  println!("Booking statuses:");
  for status in BOOKING_STATUSES {
    let p = status.presentation();
    println!(
      "  {:?}: \"{}\" cancellable={}",
      status,
      p.label,
      status.can_cancel()
    );
  }
}

async fn show_live_data(client: &ApiClient) -> Result<()> {
  let products = marketplace::list_products(client, &ProductQuery::default()).await?;
  println!("{} products in the catalog:", products.len());
  for product in products.iter().take(10) {
    println!("  {} — Rp{} (stok {})", product.name, product.price, product.quantity);
  }

  if client.session().is_authenticated() {
    let orders = marketplace::list_orders(client).await?;
    println!("{} orders:", orders.len());
    for order in &orders {
      let p = order.status.presentation();
      println!("  {} [{}] total Rp{}", order.order_number, p.label, order.total);
    }
  } else {
    info!("No session on disk; skipping the order list.");
  }

  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  print_status_tables();

  match ClientConfig::from_env() {
    Ok(config) => {
      info!(base_url = %config.api_base_url, "Connecting to backend.");
      let client = ApiClient::from_config(&config)?;
      if let Err(e) = show_live_data(&client).await {
        warn!(error = %e, "Live data unavailable.");
        if let Some(client_err) = e.downcast_ref::<glucoin_client::ClientError>() {
          println!("({})", client_err.user_message());
        }
      }
    }
    Err(e) => {
      info!(error = %e, "GLUCOIN_API_BASE_URL not configured; offline demo only.");
    }
  }

  Ok(())
}
