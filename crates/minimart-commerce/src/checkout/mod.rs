//! Checkout: fulfillment choice and the WhatsApp order message.

mod fulfillment;
mod message;

pub use fulfillment::{DeliveryAddress, Fulfillment};
pub use message::{build_message, checkout_url, WHATSAPP_BASE_URL};
