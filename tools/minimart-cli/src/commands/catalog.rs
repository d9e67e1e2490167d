//! Catalog browsing commands.

use anyhow::Result;
use minimart_commerce::store::CatalogStore;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = CatalogStore::open(ctx.open_storage()?);

    match args.command {
        Some(CatalogCommand::Products { all, category }) => {
            list_products(&store, all, category.as_deref(), ctx)
        }
        None => list_products(&store, false, None, ctx),
        Some(CatalogCommand::Offers { all }) => list_offers(&store, all, ctx),
        Some(CatalogCommand::Categories) => list_categories(&store, ctx),
    }
}

fn list_products(
    store: &CatalogStore<minimart_storage::FileStore>,
    all: bool,
    category: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    ctx.output.header("Products");

    let products: Vec<_> = store
        .products()
        .iter()
        .filter(|p| all || p.in_stock)
        .filter(|p| match category {
            Some(c) => p
                .category_id
                .as_ref()
                .is_some_and(|id| id.as_str() == c),
            None => true,
        })
        .collect();

    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    for product in products {
        let mut row = format!(
            "{} - {} [{}]",
            product.display_name(ctx.locale),
            product.price.display_in(ctx.locale),
            product.id
        );
        if !product.in_stock {
            row.push_str(" (out of stock)");
        }
        ctx.output.list_item(&row);
    }

    Ok(())
}

fn list_offers(
    store: &CatalogStore<minimart_storage::FileStore>,
    all: bool,
    ctx: &Context,
) -> Result<()> {
    ctx.output.header("Offers");

    let now = Context::now();
    let offers: Vec<_> = if all {
        store.offers().iter().collect()
    } else {
        store.live_offers(now)
    };

    if offers.is_empty() {
        ctx.output.info("No offers right now.");
        return Ok(());
    }

    for offer in offers {
        let charged = offer.charged_price();
        let mut row = format!(
            "{} - {} [{}]",
            offer.display_title(ctx.locale),
            charged.display_in(ctx.locale),
            offer.id
        );
        if let Some(before) = offer.price_before {
            row.push_str(&format!(" (was {})", before.display_in(ctx.locale)));
        }
        if !offer.is_live(now) {
            row.push_str(" (not live)");
        }
        ctx.output.list_item(&row);
    }

    Ok(())
}

fn list_categories(
    store: &CatalogStore<minimart_storage::FileStore>,
    ctx: &Context,
) -> Result<()> {
    ctx.output.header("Categories");

    let categories = store.categories();
    if categories.is_empty() {
        ctx.output.info("No categories defined.");
        return Ok(());
    }

    for category in categories {
        let count = store.products_in_category(category.id.as_str()).len();
        ctx.output.list_item(&format!(
            "{} - {} products [{}]",
            category.display_name(ctx.locale),
            count,
            category.id
        ));
    }

    Ok(())
}
