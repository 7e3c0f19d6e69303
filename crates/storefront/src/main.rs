use anyhow::Result;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use storefront_config::{AppConfig, FileStorage};
use storefront_state::domain_models::validate_quantity;
use storefront_state::Storefront;

mod commands;
mod logger;
mod render;

use commands::{Command, HELP};

fn main() -> Result<()> {
    match logger::init() {
        Ok(path) => log::info!("Starting storefront, logging to {:?}", path),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let config = AppConfig::load();
    let storage = FileStorage::open(&config.storage_path)?;
    println!("Storage: {}", storage.path().display());

    let mut shop = Storefront::new(storage);
    if let Some(session) = shop.session() {
        println!("Signed in as {} <{}>", session.name, session.email);
    }
    println!("Type 'help' for commands.");

    run(&mut shop, &config)?;

    log::info!("Exiting storefront");
    Ok(())
}

fn run(shop: &mut Storefront, config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => print!("{}", execute(shop, config, command)),
            Err(e) => println!("error: {:#}", e),
        }
    }

    Ok(())
}

/// Apply `command` to the store and return what the shell prints
fn execute(shop: &mut Storefront, config: &AppConfig, command: Command) -> String {
    let mut out = String::new();
    match command {
        Command::Login(session) => {
            let _ = writeln!(out, "Welcome, {}", session.name);
            shop.cart_store().login(session);
            out.push_str(&render::cart(shop.cart()));
        }
        Command::Logout => {
            shop.cart_store().logout();
            out.push_str("Signed out\n");
        }
        Command::Add { product, quantity } => {
            if let Err(e) = validate_quantity(&product, quantity) {
                let _ = writeln!(out, "error: {}", e);
                return out;
            }
            shop.cart_store().add_item(&product, quantity);
            out.push_str(&render::cart(shop.cart()));
        }
        Command::Remove(product_id) => {
            let Some(name) = shop.cart().find(&product_id).map(|item| item.name.clone()) else {
                let _ = writeln!(out, "{} is not in the cart", product_id);
                return out;
            };
            shop.cart_store().remove_item(&product_id);
            let _ = writeln!(out, "Removed {}", name);
            out.push_str(&render::cart(shop.cart()));
        }
        Command::Clear => {
            shop.cart_store().clear();
            out.push_str("Cart cleared\n");
        }
        Command::Ship(address) => {
            if !address.is_complete() {
                out.push_str("warning: shipping address has blank fields\n");
            }
            shop.cart_store().save_shipping_address(address);
        }
        Command::Pay(method) => shop.cart_store().save_payment_method(method),
        Command::Like(product) => {
            shop.wishlist_store().toggle(&product);
            let verb = if shop.wishlist().contains(&product.id) {
                "Liked"
            } else {
                "Unliked"
            };
            let _ = writeln!(out, "{} {}", verb, product.name);
        }
        Command::Unlike(product_id) => shop.wishlist_store().remove(&product_id),
        Command::Forget => {
            shop.wishlist_store().clear();
            out.push_str("Wishlist cleared\n");
        }
        Command::ShowCart => out.push_str(&render::cart(shop.cart())),
        Command::ShowWishlist => out.push_str(&render::wishlist(shop.wishlist())),
        Command::ShowCheckout => out.push_str(&render::checkout(
            shop.checkout_step(),
            &shop.price_summary(&config.pricing),
        )),
        Command::Order => match shop.place_order(&config.pricing) {
            Ok(draft) => out.push_str(&render::order(&draft)),
            Err(e) => {
                let _ = writeln!(out, "error: {}", e);
            }
        },
        Command::Help => {
            let _ = writeln!(out, "{}", HELP);
        }
        Command::Quit => {}
    }
    out
}
