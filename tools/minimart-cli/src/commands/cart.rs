//! Cart commands.

use anyhow::{bail, Result};
use minimart_commerce::store::{CartStore, CatalogStore};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx),
        CartCommand::Add { id } => add_product(&id, ctx),
        CartCommand::AddOffer { id } => add_offer(&id, ctx),
        CartCommand::Remove { id } => remove(&id, ctx),
        CartCommand::Clear => clear(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let store = CartStore::open(ctx.open_storage()?);
    let cart = store.cart();

    ctx.output.header("Cart");

    if cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    for line in &cart.lines {
        let mut row = format!(
            "{} - {}x {} = {} [{}:{}]",
            line.display_name(ctx.locale),
            line.quantity,
            line.unit_price.display_in(ctx.locale),
            line.line_total().display_in(ctx.locale),
            line.kind().as_str(),
            line.id()
        );
        if let Some(savings) = line.savings() {
            row.push_str(&format!(" (you save {})", savings.display_in(ctx.locale)));
        }
        ctx.output.list_item(&row);
    }

    ctx.output.kv("Items", &store.item_count().to_string());
    ctx.output.kv("Subtotal", &store.subtotal().display_in(ctx.locale));

    Ok(())
}

fn add_product(id: &str, ctx: &Context) -> Result<()> {
    let catalog = CatalogStore::open(ctx.open_storage()?);
    let Some(product) = catalog.product(id).cloned() else {
        bail!("No product with id {id}");
    };
    let name = product.display_name(ctx.locale).to_string();

    let mut store = CartStore::open(catalog.into_storage());
    store.add_product(product);

    ctx.output
        .success(&format!("Added {name} ({} items in cart)", store.item_count()));
    Ok(())
}

fn add_offer(id: &str, ctx: &Context) -> Result<()> {
    let catalog = CatalogStore::open(ctx.open_storage()?);
    let Some(offer) = catalog.offer(id).cloned() else {
        bail!("No offer with id {id}");
    };
    if !offer.is_live(Context::now()) {
        ctx.output.warn("Offer is not live; adding anyway.");
    }
    let title = offer.display_title(ctx.locale).to_string();

    let mut store = CartStore::open(catalog.into_storage());
    store.add_offer(offer);

    ctx.output
        .success(&format!("Added {title} ({} items in cart)", store.item_count()));
    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_storage()?);
    store.remove(id);
    ctx.output.success(&format!("Removed {id}"));
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut store = CartStore::open(ctx.open_storage()?);
    store.clear();
    ctx.output.success("Cart cleared");
    Ok(())
}
