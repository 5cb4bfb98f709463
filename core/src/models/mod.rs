// glucoin/core/src/models/mod.rs

//! Typed snapshots of backend entities. The backend owns every one of these;
//! the client reads them, renders them, and asks the backend to change them.
//! Status enums keep an `Unknown` catch-all so a newer server never breaks
//! deserialization on an older client.

pub mod booking;
pub mod cart;
pub mod chat;
pub mod dashboard;
pub mod doctor;
pub mod facility;
pub mod order;
pub mod product;
pub mod user;

pub use booking::{Booking, BookingStatus, ConsultationType};
pub use cart::{Cart, CartItem};
pub use chat::{ChatMessage, ChatRoom};
pub use dashboard::{DailyTask, LabResult};
pub use doctor::{DoctorIncomeSummary, DoctorProfile};
pub use facility::{Facility, FacilityType};
pub use order::{Order, OrderItem, OrderStatus, Payment, PaymentStatus, ShippingAddress};
pub use product::Product;
pub use user::{UserProfile, UserRole};
