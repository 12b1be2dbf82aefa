//! # Trolley Demo
//!
//! Scripted walkthrough of the trolley-core cart: every operation, every
//! rejection, narrated as it happens.
//!
//! ## Usage
//! ```bash
//! # Run the walkthrough (INFO-level log output)
//! cargo run -p trolley-demo
//!
//! # Verbose
//! RUST_LOG=debug cargo run -p trolley-demo
//! ```
//!
//! ## Script
//! 1. Add Apple ×2 @ 1.50 and Orange ×3 @ 2.00 (two new lines)
//! 2. Add Apple ×1 again (merges into the existing line, price untouched)
//! 3. Feed in bad input (zero quantity, blank name, zero price) and show
//!    that every rejection leaves the cart exactly as it was
//! 4. Print the snapshot: 2 lines, total 10.50
//! 5. Remove Apple, then try a name that was never added
//! 6. Print the snapshot: 1 line, total 6.00
//! 7. Clear and print the final snapshot: no lines, total 0.00
//!
//! The cart is a local variable in `main`. Nothing here could reach its
//! backing storage even if it wanted to; that is the point of the library.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trolley_core::{Cart, CartSnapshot, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("🛒 Trolley Cart Walkthrough");
    println!("===========================");
    println!();

    // The only cart in the program, owned right here.
    let mut cart = Cart::new();

    // Fill the cart
    add_and_report(&mut cart, "Apple", 2, Money::from_major_minor(1, 50));
    add_and_report(&mut cart, "Orange", 3, Money::from_major_minor(2, 0));
    add_and_report(&mut cart, "Apple", 1, Money::from_major_minor(1, 50)); // merges

    // Invalid input is reported and changes nothing
    add_and_report(&mut cart, "Banana", 0, Money::from_minor_units(99));
    add_and_report(&mut cart, "   ", 1, Money::from_minor_units(99));
    add_and_report(&mut cart, "Cherry", 4, Money::zero());

    print_snapshot("After adds", &cart.snapshot())?;

    // Remove: one hit, one miss
    remove_and_report(&mut cart, "Apple");
    remove_and_report(&mut cart, "Pear");

    print_snapshot("After removals", &cart.snapshot())?;

    // Start over
    cart.clear();
    info!("Cart cleared");

    print_snapshot("After clear", &cart.snapshot())?;

    info!("Walkthrough complete");
    Ok(())
}

/// Adds to the cart and logs the outcome. Rejections are part of the
/// show: they get a warning line and the cart stays as it was.
fn add_and_report(cart: &mut Cart, name: &str, quantity: i64, unit_price: Money) {
    match cart.add(name, quantity, unit_price) {
        Ok(outcome) => {
            info!(name, quantity, price = %unit_price, ?outcome, "Item added");
        }
        Err(err) => {
            warn!(name, quantity, price = %unit_price, %err, "Add rejected");
        }
    }
}

/// Removes from the cart and logs the result. A miss is a warning, not a
/// crash.
fn remove_and_report(cart: &mut Cart, name: &str) {
    match cart.remove(name) {
        Ok(()) => info!(name, "Item removed"),
        Err(err) => warn!(%err, "Remove failed"),
    }
}

/// Prints a labelled snapshot block: pretty JSON plus the running total.
fn print_snapshot(label: &str, snapshot: &CartSnapshot) -> serde_json::Result<()> {
    println!();
    println!("=== {} ===", label);
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    println!("Total: {}", snapshot.total);
    println!();
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
