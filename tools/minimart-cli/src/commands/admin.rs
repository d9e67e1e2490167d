//! Admin commands: password gate and catalog management.

use anyhow::{bail, Context as _, Result};
use dialoguer::Password;
use minimart_auth::{AdminAuth, LockoutPolicy, LoginAttempts, PasswordHasher};
use minimart_commerce::catalog::{Category, Offer, Product};
use minimart_commerce::ids::CategoryId;
use minimart_commerce::store::CatalogStore;
use minimart_commerce::{Currency, Money};
use minimart_storage::{FileStore, Storage};

use super::{AdminArgs, AdminCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Storage key for the persisted lockout tally.
const ADMIN_ATTEMPTS_KEY: &str = "minimart.admin.attempts";

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::SetPassword => set_password(ctx),
        AdminCommand::InitConfig { force } => init_config(force, ctx),
        command => {
            let mut storage = ctx.open_storage()?;
            authenticate(ctx, &mut storage)?;
            let mut catalog = CatalogStore::open(storage);
            mutate_catalog(command, &mut catalog, ctx)
        }
    }
}

/// Prompt for the admin password and check it against the stored hash,
/// with the lockout tally persisted across invocations.
fn authenticate(ctx: &Context, storage: &mut FileStore) -> Result<()> {
    let Some(hash) = ctx.config.admin.password_hash.clone() else {
        bail!("No admin password set; run `minimart admin set-password` first");
    };

    let policy = LockoutPolicy {
        max_attempts: ctx.config.admin.max_attempts,
        lockout_secs: ctx.config.admin.lockout_secs,
    };
    let attempts: LoginAttempts = storage
        .get(ADMIN_ATTEMPTS_KEY)
        .unwrap_or_default()
        .unwrap_or_default();
    let mut auth = AdminAuth::new(hash, policy).with_attempts(attempts);

    let password = Password::new()
        .with_prompt("Admin password")
        .interact()
        .context("Failed to read password")?;

    let result = auth.login(&password, Context::now());
    storage
        .set(ADMIN_ATTEMPTS_KEY, auth.attempts())
        .context("Failed to persist login attempts")?;

    match result {
        Ok(_session) => {
            ctx.output.debug("Admin login ok");
            Ok(())
        }
        Err(e) => {
            if auth.remaining_attempts() > 0 {
                ctx.output
                    .warn(&format!("{} attempts left", auth.remaining_attempts()));
            }
            Err(e.into())
        }
    }
}

fn set_password(ctx: &Context) -> Result<()> {
    let password = Password::new()
        .with_prompt("New admin password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;

    PasswordHasher::validate_password(&password)?;
    let hash = PasswordHasher::default().hash(&password)?;

    let mut config = ctx.config.clone();
    config.admin.password_hash = Some(hash);
    let path = ctx
        .config_path
        .to_str()
        .context("Config path is not valid UTF-8")?;
    config.save(path)?;

    ctx.output.success(&format!("Admin password saved to {path}"));
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("minimart.toml");
    if path.exists() && !force {
        bail!("{} already exists; use --force to overwrite", path.display());
    }
    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn mutate_catalog(
    command: AdminCommand,
    catalog: &mut CatalogStore<FileStore>,
    ctx: &Context,
) -> Result<()> {
    match command {
        AdminCommand::AddProduct {
            id,
            name,
            price,
            name_nl,
            name_ar,
            category,
            image,
            out_of_stock,
        } => {
            let mut product = Product::new(
                id.as_str(),
                name,
                Money::from_decimal(price, Currency::EUR),
            );
            product.name_nl = name_nl;
            product.name_ar = name_ar;
            product.category_id = category.map(CategoryId::new);
            product.image = image;
            product.in_stock = !out_of_stock;
            catalog.upsert_product(product);
            ctx.output.success(&format!("Saved product {id}"));
        }
        AdminCommand::RemoveProduct { id } => {
            if catalog.remove_product(&id) {
                ctx.output.success(&format!("Removed product {id}"));
            } else {
                bail!("No product with id {id}");
            }
        }
        AdminCommand::AddOffer {
            id,
            title,
            price,
            price_before,
            price_after,
            title_nl,
            title_ar,
            days,
            image,
        } => {
            let now = Context::now();
            let mut offer = Offer::new(
                id.as_str(),
                title,
                Money::from_decimal(price, Currency::EUR),
                now,
                now + days * 24 * 60 * 60,
            );
            offer.price_before = price_before.map(|p| Money::from_decimal(p, Currency::EUR));
            offer.price_after = price_after.map(|p| Money::from_decimal(p, Currency::EUR));
            offer.title_nl = title_nl;
            offer.title_ar = title_ar;
            offer.image = image;
            catalog.upsert_offer(offer);
            ctx.output.success(&format!("Saved offer {id}"));
        }
        AdminCommand::RemoveOffer { id } => {
            if catalog.remove_offer(&id) {
                ctx.output.success(&format!("Removed offer {id}"));
            } else {
                bail!("No offer with id {id}");
            }
        }
        AdminCommand::AddCategory {
            id,
            name,
            name_nl,
            name_ar,
            position,
        } => {
            let mut cat = Category::new(id.as_str(), name).with_position(position);
            cat.name_nl = name_nl;
            cat.name_ar = name_ar;
            catalog.upsert_category(cat);
            ctx.output.success(&format!("Saved category {id}"));
        }
        AdminCommand::RemoveCategory { id } => {
            if catalog.remove_category(&id) {
                ctx.output.success(&format!("Removed category {id}"));
            } else {
                bail!("No category with id {id}");
            }
        }
        AdminCommand::SetPassword | AdminCommand::InitConfig { .. } => {
            unreachable!("handled before authentication")
        }
    }
    Ok(())
}
