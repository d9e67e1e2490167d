//! The WhatsApp order message.
//!
//! Pure functions from cart lines to a localized order text and the
//! wa.me deep link that carries it. Callers guard the empty-cart
//! precondition and clear the cart after dispatch.

use crate::cart::{subtotal_of, CartLine};
use crate::checkout::Fulfillment;
use crate::error::CommerceError;
use crate::locale::Locale;
use url::Url;

/// Base URL of the WhatsApp deep link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Build the localized order message for the given lines.
///
/// Layout: greeting, one row per line item, the subtotal, the
/// fulfillment sentence, a closing line — sections joined by blank
/// lines. Prices use the locale's decimal glyph; the numbers are the
/// same in every locale.
pub fn build_message(lines: &[CartLine], locale: Locale, fulfillment: &Fulfillment) -> String {
    let rows = lines
        .iter()
        .map(|line| {
            format!(
                "\u{2022} {} - {}x {} = {}",
                line.display_name(locale),
                line.quantity,
                line.unit_price.display_in(locale),
                line.line_total().display_in(locale),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let subtotal = format!(
        "{}: {}",
        subtotal_label(locale),
        subtotal_of(lines).display_in(locale)
    );

    let fulfillment_block = match fulfillment {
        Fulfillment::Pickup => pickup_line(locale).to_string(),
        Fulfillment::Delivery(addr) => delivery_line(locale, &addr.one_line()),
    };

    [
        greeting(locale).to_string(),
        rows,
        subtotal,
        fulfillment_block,
        closing(locale).to_string(),
    ]
    .join("\n\n")
}

/// Build the complete checkout deep link: the order message for the
/// lines, URL-encoded into `https://wa.me/{number}?text=...`.
pub fn checkout_url(
    number: &str,
    lines: &[CartLine],
    locale: Locale,
    fulfillment: &Fulfillment,
) -> Result<Url, CommerceError> {
    // wa.me expects the number in international format, digits only.
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommerceError::InvalidWhatsAppNumber(number.to_string()));
    }
    let message = build_message(lines, locale, fulfillment);
    let mut url = Url::parse(&format!("{}/{}", WHATSAPP_BASE_URL, number))
        .map_err(|_| CommerceError::InvalidWhatsAppNumber(number.to_string()))?;
    url.query_pairs_mut().append_pair("text", &message);
    Ok(url)
}

fn greeting(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Hello! I would like to place the following order:",
        Locale::Nl => "Hallo! Ik wil graag de volgende bestelling plaatsen:",
        Locale::Ar => "\u{0645}\u{0631}\u{062d}\u{0628}\u{0627}\u{064b}! \u{0623}\u{0648}\u{062f} \u{062a}\u{0642}\u{062f}\u{064a}\u{0645} \u{0627}\u{0644}\u{0637}\u{0644}\u{0628} \u{0627}\u{0644}\u{062a}\u{0627}\u{0644}\u{064a}:",
    }
}

fn subtotal_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Total",
        Locale::Nl => "Totaal",
        Locale::Ar => "\u{0627}\u{0644}\u{0645}\u{062c}\u{0645}\u{0648}\u{0639}",
    }
}

fn pickup_line(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "I will pick up the order at the store.",
        Locale::Nl => "Ik kom de bestelling afhalen in de winkel.",
        Locale::Ar => "\u{0633}\u{0623}\u{0633}\u{062a}\u{0644}\u{0645} \u{0627}\u{0644}\u{0637}\u{0644}\u{0628} \u{0645}\u{0646} \u{0627}\u{0644}\u{0645}\u{062a}\u{062c}\u{0631}.",
    }
}

fn delivery_line(locale: Locale, address: &str) -> String {
    match locale {
        Locale::En => format!("Please deliver the order to: {address}"),
        Locale::Nl => format!("Graag de bestelling bezorgen op: {address}"),
        Locale::Ar => format!(
            "\u{064a}\u{0631}\u{062c}\u{0649} \u{062a}\u{0648}\u{0635}\u{064a}\u{0644} \u{0627}\u{0644}\u{0637}\u{0644}\u{0628} \u{0625}\u{0644}\u{0649}: {address}"
        ),
    }
}

fn closing(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Thank you!",
        Locale::Nl => "Alvast bedankt!",
        Locale::Ar => "\u{0634}\u{0643}\u{0631}\u{0627}\u{064b} \u{062c}\u{0632}\u{064a}\u{0644}\u{0627}\u{064b}!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{Offer, Product};
    use crate::checkout::DeliveryAddress;
    use crate::money::{Currency, Money};

    fn bread_twice() -> Vec<CartLine> {
        let mut cart = Cart::new();
        let bread = Product::new("p1", "Bread", Money::new(150, Currency::EUR))
            .with_translations("Brood", "\u{062e}\u{0628}\u{0632}");
        cart.add_product(bread.clone());
        cart.add_product(bread);
        cart.lines
    }

    #[test]
    fn test_en_pickup_message() {
        let message = build_message(&bread_twice(), Locale::En, &Fulfillment::Pickup);

        assert!(message.contains("\u{2022} Bread - 2x \u{20ac}1.50 = \u{20ac}3.00"));
        assert!(message.contains("Total: \u{20ac}3.00"));
        assert!(message.contains("I will pick up the order at the store."));
        assert!(!message.contains("deliver"));
        assert!(message.starts_with("Hello!"));
        assert!(message.ends_with("Thank you!"));
    }

    #[test]
    fn test_nl_uses_decimal_comma_and_translated_name() {
        let message = build_message(&bread_twice(), Locale::Nl, &Fulfillment::Pickup);

        assert!(message.contains("\u{2022} Brood - 2x \u{20ac}1,50 = \u{20ac}3,00"));
        assert!(message.contains("Totaal: \u{20ac}3,00"));
        assert!(message.contains("afhalen"));
    }

    #[test]
    fn test_delivery_message_interpolates_address() {
        let addr = DeliveryAddress::new("Hoofdstraat", "12a", "1234 AB", "Amsterdam");
        let message = build_message(
            &bread_twice(),
            Locale::En,
            &Fulfillment::Delivery(addr),
        );

        assert!(message
            .contains("Please deliver the order to: Hoofdstraat 12a, 1234 AB Amsterdam"));
        assert!(!message.contains("pick up"));
    }

    #[test]
    fn test_sections_are_separated_by_blank_lines() {
        let message = build_message(&bread_twice(), Locale::En, &Fulfillment::Pickup);
        assert_eq!(message.matches("\n\n").count(), 4);
    }

    #[test]
    fn test_offer_rows_use_charged_price() {
        let mut cart = Cart::new();
        cart.add_offer(
            Offer::new("o1", "Family pack", Money::new(1000, Currency::EUR), 0, 100)
                .with_price_before(Money::new(1500, Currency::EUR)),
        );
        let message = build_message(&cart.lines, Locale::En, &Fulfillment::Pickup);

        assert!(message.contains("\u{2022} Family pack - 1x \u{20ac}10.00 = \u{20ac}10.00"));
        assert!(message.contains("Total: \u{20ac}10.00"));
    }

    #[test]
    fn test_checkout_url_encodes_message() {
        let url = checkout_url("31612345678", &bread_twice(), Locale::En, &Fulfillment::Pickup)
            .unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/31612345678");
        let query = url.query().unwrap();
        assert!(query.starts_with("text="));
        // The euro sign is percent-encoded as UTF-8.
        assert!(query.contains("%E2%82%AC"));

        // The message survives a decode round-trip.
        let (_, text) = url.query_pairs().next().unwrap();
        assert!(text.contains("Bread - 2x \u{20ac}1.50"));
    }

    #[test]
    fn test_checkout_url_rejects_unusable_number() {
        let result = checkout_url("not a number", &bread_twice(), Locale::En, &Fulfillment::Pickup);
        assert!(matches!(result, Err(CommerceError::InvalidWhatsAppNumber(_))));
    }
}
