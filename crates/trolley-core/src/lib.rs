//! # trolley-core: Pure Cart Logic for Trolley
//!
//! This crate is the **heart** of Trolley. It contains the cart and every
//! rule about it as pure, I/O-free code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Trolley Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   trolley-demo (Binary)                         │   │
//! │  │     scripted walkthrough • tracing output • JSON snapshots      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns a Cart value                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │        add() ─── remove() ─── snapshot() ─── clear()            │   │
//! │  │          │           │             │            │               │   │
//! │  │  ┌───────▼───────────▼─────────────▼────────────▼────────────┐ │   │
//! │  │  │              Cart { items: Vec<LineItem> }                │ │   │
//! │  │  │         PRIVATE FIELD • NO OTHER DOOR EXISTS              │ │   │
//! │  │  └───────────────────────────────────────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • NO CACHED TOTALS • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The encapsulated [`Cart`], its [`LineItem`]s and snapshots
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **No Globals**: Cart state lives in `Cart` values the caller owns.
//!    There is no process-wide cart, so unrelated code cannot corrupt one.
//! 2. **Four Doors Only**: add, remove, snapshot, clear. The backing
//!    collection is private; the compiler rejects any other access path.
//! 3. **Integer Money**: All monetary values are minor units (i64) to
//!    avoid float errors.
//! 4. **Explicit Errors**: Invalid input and missing names are typed
//!    `Result`s, never strings or panics.
//! 5. **Derived Totals**: The total is recomputed from the lines on every
//!    read. No cached figure, nothing to drift out of sync.
//!
//! ## Example Usage
//!
//! ```rust
//! use trolley_core::{Cart, Money};
//!
//! let mut cart = Cart::new();
//!
//! // Prices are minor units (never floats!)
//! cart.add("Apple", 2, Money::from_major_minor(1, 50))?;
//! cart.add("Orange", 3, Money::from_major_minor(2, 0))?;
//! cart.add("Apple", 1, Money::from_major_minor(1, 50))?; // merges: Apple ×3
//!
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.items.len(), 2);
//! assert_eq!(snapshot.total, Money::from_minor_units(1050)); // 10.50
//!
//! cart.remove("Apple")?;
//! assert_eq!(cart.total(), Money::from_minor_units(600)); // 6.00
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Cart` instead of
// `use trolley_core::cart::Cart`

pub use cart::{AddOutcome, Cart, CartSnapshot, LineItem};
pub use error::{NotFoundError, ValidationError};
pub use money::Money;
