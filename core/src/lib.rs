// src/lib.rs

//! Glucoin client core: the headless half of the Glucoin healthcare app.
//!
//! Everything the screens need short of rendering lives here:
//!  - Typed REST wrappers per surface area (auth, marketplace, facilities,
//!    patient dashboard, doctor dashboard, chat).
//!  - An explicit, injectable session context persisted between runs.
//!  - Status presentation tables and the order/booking action dispatcher
//!    (call, then unconditionally re-fetch; never compute next state).
//!  - Screen logic: OTP entry, quantity stepping, facility search with a
//!    geolocation fallback, payment-callback interpretation, calendar grids,
//!    client-side pagination with a stale-response guard.
//!
//! The backend stays the single source of truth throughout: local state is
//! a cache of snapshots, overwritten wholesale on every successful re-fetch.

pub mod actions;
pub mod api;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod geo;
pub mod http;
pub mod models;
pub mod otp;
pub mod payment;
pub mod quantity;
pub mod search;
pub mod session;
pub mod status;

// --- Re-exports for the Public API ---

pub use crate::actions::{cancel_booking, dispatch_order_action, OrderActionOutcome};
pub use crate::cache::{EntityCache, Identifiable};
pub use crate::config::{ClientConfig, FALLBACK_COORDINATE, MAX_RADIUS_KM, MIN_RADIUS_KM};
pub use crate::error::{ClientError, ClientResult};
pub use crate::geo::{Coordinate, FixedLocationProvider, LocationProvider};
pub use crate::http::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Transport};
pub use crate::otp::OtpInput;
pub use crate::payment::{PaymentCallback, PaymentOutcome};
pub use crate::quantity::QuantitySelector;
pub use crate::search::{paginate, search_facilities, Debouncer, FacilityFilter, FacilityHit, Page, SearchSequence};
pub use crate::session::{Session, SessionStore};
pub use crate::status::{OrderAction, StatusPresentation};
