//! Checkout command: build the WhatsApp order link.

use anyhow::{bail, Result};
use minimart_commerce::checkout::{build_message, checkout_url, DeliveryAddress, Fulfillment};
use minimart_commerce::store::CartStore;

use super::{CheckoutArgs, FulfillmentMethod};
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_storage()?);

    if store.cart().is_empty() {
        bail!("The cart is empty; add something first");
    }

    let fulfillment = match args.method {
        FulfillmentMethod::Pickup => Fulfillment::Pickup,
        FulfillmentMethod::Delivery => {
            let address = DeliveryAddress::new(
                args.street.unwrap_or_default(),
                args.house_number.unwrap_or_default(),
                args.postal_code.unwrap_or_default(),
                args.city.unwrap_or_default(),
            );
            if !address.is_complete() {
                bail!("Delivery needs --street, --house-number, --postal-code and --city");
            }
            Fulfillment::Delivery(address)
        }
    };

    let number = &ctx.config.store.whatsapp_number;
    let message = build_message(&store.cart().lines, ctx.locale, &fulfillment);
    let url = checkout_url(number, &store.cart().lines, ctx.locale, &fulfillment)?;

    ctx.output.header("Order message");
    ctx.output.block(&message);
    ctx.output.header("WhatsApp link");
    ctx.output.block(url.as_str());

    // Dispatching the link is the end of this cart.
    if !args.keep_cart {
        store.clear();
        store.close();
        ctx.output.success("Cart cleared");
    }

    Ok(())
}
