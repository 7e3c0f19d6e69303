//! Shell commands
//!
//! One command per input line. Words are whitespace separated; the last
//! argument of `login`, `add` and `like` swallows the rest of the line so
//! names may contain spaces. `ship` takes `;`-separated address fields.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use storefront_state::domain_models::{
    PaymentMethod, Product, ProductId, ShippingAddress, UserSession,
};

pub const HELP: &str = "\
Commands:
  login <user-id> <email> <name>             sign in
  logout                                     sign out
  add <product-id> <price> <qty> <stock> <name>
                                             set the quantity of a product in the cart
  remove <product-id>                        remove a product from the cart
  clear                                      empty the cart
  ship <name>; <address>; <city>; <postal code>; <country>
                                             save the shipping address
  pay <PayPal|Stripe|CashOnDelivery>         choose the payment method
  like <product-id> <price> <name>           toggle a product on the wishlist
  unlike <product-id>                        remove a product from the wishlist
  forget                                     clear the wishlist
  cart | wishlist | checkout                 show state
  order                                      place the order
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(UserSession),
    Logout,
    Add { product: Product, quantity: u32 },
    Remove(ProductId),
    Clear,
    Ship(ShippingAddress),
    Pay(PaymentMethod),
    Like(Product),
    Unlike(ProductId),
    Forget,
    ShowCart,
    ShowWishlist,
    ShowCheckout,
    Order,
    Help,
    Quit,
}

/// Split off the first whitespace-delimited word
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], input[end..].trim_start())),
        None => Some((input, "")),
    }
}

fn take<'a>(input: &'a str, what: &str) -> Result<(&'a str, &'a str)> {
    next_word(input).with_context(|| format!("missing {}", what))
}

fn rest<'a>(input: &'a str, what: &str) -> Result<&'a str> {
    let rest = input.trim();
    if rest.is_empty() {
        bail!("missing {}", what);
    }
    Ok(rest)
}

fn parse_price(word: &str) -> Result<Decimal> {
    let price = Decimal::from_str(word).with_context(|| format!("invalid price '{}'", word))?;
    if price.is_sign_negative() {
        bail!("price can't be negative");
    }
    Ok(price)
}

fn parse_count(word: &str, what: &str) -> Result<u32> {
    word.parse()
        .with_context(|| format!("invalid {} '{}'", what, word))
}

fn parse_address(input: &str) -> Result<ShippingAddress> {
    let fields: Vec<&str> = input.split(';').map(str::trim).collect();
    let [full_name, address, city, postal_code, country] = fields.as_slice() else {
        bail!("expected 5 ';'-separated fields, got {}", fields.len());
    };
    Ok(ShippingAddress::new(
        *full_name,
        *address,
        *city,
        *postal_code,
        *country,
    ))
}

fn no_args(command: Command, args: &str) -> Result<Command> {
    if !args.trim().is_empty() {
        bail!("unexpected arguments '{}'", args.trim());
    }
    Ok(command)
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Command> {
        let (name, args) = take(line, "command")?;

        match name.to_lowercase().as_str() {
            "login" => {
                let (user_id, args) = take(args, "user id")?;
                let (email, args) = take(args, "email")?;
                let name = rest(args, "name")?;
                Ok(Command::Login(UserSession::new(user_id, name, email)))
            }
            "add" => {
                let (id, args) = take(args, "product id")?;
                let (price, args) = take(args, "price")?;
                let (quantity, args) = take(args, "quantity")?;
                let (stock, args) = take(args, "stock")?;
                let name = rest(args, "product name")?;
                let product = Product::new(id, name, parse_price(price)?)
                    .with_stock(parse_count(stock, "stock")?);
                Ok(Command::Add {
                    product,
                    quantity: parse_count(quantity, "quantity")?,
                })
            }
            "like" => {
                let (id, args) = take(args, "product id")?;
                let (price, args) = take(args, "price")?;
                let name = rest(args, "product name")?;
                Ok(Command::Like(Product::new(id, name, parse_price(price)?)))
            }
            "remove" => Ok(Command::Remove(ProductId::new(rest(args, "product id")?))),
            "unlike" => Ok(Command::Unlike(ProductId::new(rest(args, "product id")?))),
            "ship" => Ok(Command::Ship(parse_address(rest(args, "address")?)?)),
            "pay" => {
                let method = rest(args, "payment method")?;
                PaymentMethod::from_str(method)
                    .map(Command::Pay)
                    .with_context(|| format!("unknown payment method '{}'", method))
            }
            "logout" => no_args(Command::Logout, args),
            "clear" => no_args(Command::Clear, args),
            "forget" => no_args(Command::Forget, args),
            "cart" => no_args(Command::ShowCart, args),
            "wishlist" => no_args(Command::ShowWishlist, args),
            "checkout" => no_args(Command::ShowCheckout, args),
            "order" => no_args(Command::Order, args),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => bail!("unknown command '{}', try 'help'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_login_with_spaced_name() {
        let command = Command::parse("login u1 jane@example.com Jane Doe").unwrap();
        assert_eq!(
            command,
            Command::Login(UserSession::new("u1", "Jane Doe", "jane@example.com"))
        );
    }

    #[test]
    fn test_parse_add() {
        let (product, quantity) = match Command::parse("  add p1 19.99 2 5 Wireless Mouse ") {
            Ok(Command::Add { product, quantity }) => (product, quantity),
            other => panic!("expected add, got {:?}", other),
        };
        assert_eq!(product.id, ProductId::new("p1"));
        assert_eq!(product.name, "Wireless Mouse");
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.count_in_stock, 5);
        assert_eq!(quantity, 2);
    }

    #[test]
    fn test_parse_add_rejects_bad_numbers() {
        assert!(Command::parse("add p1 abc 1 5 Mouse").is_err());
        assert!(Command::parse("add p1 -3 1 5 Mouse").is_err());
        assert!(Command::parse("add p1 3 -1 5 Mouse").is_err());
        assert!(Command::parse("add p1 3 1 5").is_err());
    }

    #[test]
    fn test_parse_ship() {
        let command = Command::parse("ship Jane Doe; 1 Main St; Springfield; 12345; US").unwrap();
        assert_eq!(
            command,
            Command::Ship(ShippingAddress::new(
                "Jane Doe",
                "1 Main St",
                "Springfield",
                "12345",
                "US"
            ))
        );
        assert!(Command::parse("ship Jane; 1 Main St").is_err());
    }

    #[test]
    fn test_parse_pay() {
        assert_eq!(
            Command::parse("pay cashondelivery").unwrap(),
            Command::Pay(PaymentMethod::CashOnDelivery)
        );
        assert!(Command::parse("pay cheque").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("CART").unwrap(), Command::ShowCart);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("unlike w1").unwrap(),
            Command::Unlike(ProductId::new("w1"))
        );
        assert!(Command::parse("logout now").is_err());
        assert!(Command::parse("").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
