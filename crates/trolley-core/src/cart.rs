//! # Cart Module
//!
//! The encapsulated shopping cart: an ordered collection of line items
//! behind four operations.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Caller Intent             Operation              Collection Change     │
//! │  ─────────────             ─────────              ─────────────────     │
//! │                                                                         │
//! │  Put an item in ─────────► add(name, qty, price)  push, or qty += on    │
//! │                                                   an existing name      │
//! │                                                                         │
//! │  Take an item out ───────► remove(name) ────────► drop the named line   │
//! │                                                                         │
//! │  See the contents ───────► snapshot() ──────────► none (owned copy out) │
//! │                                                                         │
//! │  Start over ─────────────► clear() ─────────────► empty the collection  │
//! │                                                                         │
//! │  There is no fifth door. The item vector is a private field, so the     │
//! │  compiler enforces what a code review would otherwise have to.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NotFoundError, ValidationError};
use crate::money::Money;
use crate::validation::{
    checked_cart_total, checked_line_total, checked_merged_quantity, validate_item_name,
    validate_quantity, validate_unit_price,
};

// =============================================================================
// Line Item
// =============================================================================

/// One named entry in the cart.
///
/// ## Design Notes
/// - `name` is the line's identity: unique within a cart, matched
///   case-sensitively and byte-exactly.
/// - `unit_price` is fixed when the line is first added. Merging more
///   quantity onto the line does not reprice it.
/// - The fields are public because a `LineItem` you hold is always a
///   detached value (built by you, or cloned out of a snapshot); editing
///   it moves nothing inside any cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display name and unique key within the cart.
    pub name: String,

    /// Number of units, always > 0 for a line inside a cart.
    pub quantity: i64,

    /// Price per unit, always > 0 for a line inside a cart.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// The line's contribution to the cart total (unit price × quantity).
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::{LineItem, Money};
    ///
    /// let apples = LineItem::new("Apple", 3, Money::from_major_minor(1, 50));
    /// assert_eq!(apples.line_total(), Money::from_minor_units(450));
    /// ```
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// What `add` did: status for the caller, never control flow.
///
/// Both variants mean success; callers that only care whether the add
/// worked can ignore which one they got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// An existing line with the same name absorbed the quantity.
    Merged,
}

// =============================================================================
// Cart
// =============================================================================

/// An encapsulated, ordered collection of [`LineItem`]s.
///
/// ## Invariants
/// - At most one line per distinct name.
/// - Every stored line has quantity > 0 and unit price > 0; input that
///   fails validation is never inserted or merged.
/// - Every line total and the cart total fit in i64 minor units; an add
///   that would overflow any of them is rejected before mutation.
/// - Insertion order is preserved; removal keeps the remaining lines in
///   their original relative order.
/// - The total is recomputed from the lines on every read, never cached.
///
/// ## Encapsulation
/// The backing vector is a private field and no method hands out a
/// reference to it. The only way in is [`add`](Cart::add) /
/// [`remove`](Cart::remove) / [`clear`](Cart::clear); the only way out is
/// [`snapshot`](Cart::snapshot), which returns owned clones. State lives
/// in `Cart` values you construct; there is no process-wide cart for
/// unrelated code to reach.
///
/// Reaching around the operations does not compile:
///
/// ```compile_fail
/// use trolley_core::{Cart, LineItem, Money};
///
/// let mut cart = Cart::new();
/// // error[E0616]: field `items` of struct `Cart` is private
/// cart.items.push(LineItem::new("Smuggled", 99, Money::zero()));
/// ```
///
/// ## Example
/// ```rust
/// use trolley_core::{AddOutcome, Cart, Money};
///
/// let mut cart = Cart::new();
/// cart.add("Apple", 2, Money::from_major_minor(1, 50))?;
/// cart.add("Orange", 3, Money::from_major_minor(2, 0))?;
///
/// // A second add under the same name merges quantities.
/// let outcome = cart.add("Apple", 1, Money::from_major_minor(1, 50))?;
/// assert_eq!(outcome, AddOutcome::Merged);
///
/// let snapshot = cart.snapshot();
/// assert_eq!(snapshot.items.len(), 2);
/// assert_eq!(snapshot.total, Money::from_minor_units(1050)); // 4.50 + 6.00
/// # Ok::<(), trolley_core::ValidationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Cart {
    /// Backing storage. Private on purpose: every mutation and every read
    /// goes through the methods below, which is the whole guarantee this
    /// type exists to give.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds quantity under `name`, appending a new line or merging into an
    /// existing one.
    ///
    /// ## Behavior
    /// - All three inputs are validated first; any rejection leaves the
    ///   cart exactly as it was, including when `name` already has a line.
    /// - If a line named `name` exists, its quantity grows by `quantity`
    ///   and its stored unit price stays as it was; the `unit_price`
    ///   argument is not applied retroactively.
    /// - Otherwise a new line is appended at the end.
    /// - There are no size caps, but an add whose merged quantity, line
    ///   total, or cart total would not fit in i64 minor units is rejected
    ///   like any other invalid input, cart unchanged.
    ///
    /// ## Returns
    /// [`AddOutcome::Added`] for a fresh line, [`AddOutcome::Merged`] for
    /// a quantity merge. Status only; both are success.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::{AddOutcome, Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// assert_eq!(
    ///     cart.add("Apple", 2, Money::from_major_minor(1, 50))?,
    ///     AddOutcome::Added
    /// );
    /// assert_eq!(
    ///     cart.add("Apple", 1, Money::from_major_minor(1, 50))?,
    ///     AddOutcome::Merged
    /// );
    ///
    /// // Rejected input changes nothing and is reported, not thrown.
    /// assert!(cart.add("Apple", 0, Money::from_major_minor(1, 50)).is_err());
    /// assert_eq!(cart.snapshot().items[0].quantity, 3);
    /// # Ok::<(), trolley_core::ValidationError>(())
    /// ```
    pub fn add(
        &mut self,
        name: &str,
        quantity: i64,
        unit_price: Money,
    ) -> Result<AddOutcome, ValidationError> {
        // Validate everything before looking at the collection, so a
        // failure cannot leave a partial change behind.
        validate_item_name(name)?;
        validate_quantity(quantity)?;
        validate_unit_price(unit_price)?;

        if let Some(index) = self.items.iter().position(|i| i.name == name) {
            // Work out the merged line and the totals it implies before
            // writing anything back; an overflow rejection is a no-op too.
            let merged_quantity = checked_merged_quantity(self.items[index].quantity, quantity)?;
            let line_total = checked_line_total(self.items[index].unit_price, merged_quantity)?;
            let others: Money = self
                .items
                .iter()
                .filter(|i| i.name != name)
                .map(LineItem::line_total)
                .sum();
            checked_cart_total(others, line_total)?;

            self.items[index].quantity = merged_quantity;
            return Ok(AddOutcome::Merged);
        }

        let line_total = checked_line_total(unit_price, quantity)?;
        checked_cart_total(self.total(), line_total)?;

        self.items.push(LineItem::new(name, quantity, unit_price));
        Ok(AddOutcome::Added)
    }

    /// Removes the line named `name`.
    ///
    /// Fails with [`NotFoundError`] when no line matches; the cart is then
    /// unchanged. The remaining lines keep their relative order.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::{Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add("Apple", 2, Money::from_major_minor(1, 50))?;
    ///
    /// assert!(cart.remove("Apple").is_ok());
    /// assert!(cart.remove("Apple").is_err()); // already gone, reported
    /// assert!(cart.is_empty());
    /// # Ok::<(), trolley_core::ValidationError>(())
    /// ```
    pub fn remove(&mut self, name: &str) -> Result<(), NotFoundError> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.name != name);

        if self.items.len() == initial_len {
            Err(NotFoundError {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns a detached view of the cart: the lines in insertion order
    /// plus the current total.
    ///
    /// The snapshot owns its data. Editing it, or holding it while the
    /// cart changes, affects neither the cart nor any other snapshot.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::{Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add("Orange", 3, Money::from_major_minor(2, 0))?;
    ///
    /// let mut view = cart.snapshot();
    /// view.items.clear(); // scribbling on the copy...
    ///
    /// assert_eq!(cart.snapshot().items.len(), 1); // ...moves nothing inside
    /// # Ok::<(), trolley_core::ValidationError>(())
    /// ```
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self)
    }

    /// Empties the cart unconditionally. Always succeeds, even when the
    /// cart is already empty.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the summed quantity across all lines.
    ///
    /// Cannot overflow: every unit price is at least one minor unit, so
    /// this sum is bounded by the cart total, which `add` keeps in range.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Computes the cart total: Σ quantity × unit price over the lines.
    ///
    /// Recomputed on every call from the lines themselves; there is no
    /// cached figure to drift out of sync. Zero for an empty cart. Plain
    /// arithmetic is safe here: `add` refuses any state whose total would
    /// not fit.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// A detached, owned view of a cart at one moment: items in insertion
/// order plus the computed total.
///
/// This is the cart's only externally visible shape. It is plain data:
/// nothing you do to it can reach back into the cart it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// The lines, in the order they were first added.
    pub items: Vec<LineItem>,

    /// Σ quantity × unit price at the moment the snapshot was taken.
    pub total: Money,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand for building prices in tests.
    fn price(minor_units: i64) -> Money {
        Money::from_minor_units(minor_units)
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();

        let outcome = cart.add("Apple", 2, price(150)).unwrap();
        assert_eq!(outcome, AddOutcome::Added);

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items, vec![LineItem::new("Apple", 2, price(150))]);
        assert_eq!(snapshot.total, price(300)); // 2 × 1.50
    }

    #[test]
    fn test_add_same_name_merges_quantity() {
        let mut cart = Cart::new();

        cart.add("Apple", 2, price(150)).unwrap();
        let outcome = cart.add("Apple", 1, price(150)).unwrap();
        assert_eq!(outcome, AddOutcome::Merged);

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items, vec![LineItem::new("Apple", 3, price(150))]);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_merge_keeps_first_unit_price() {
        let mut cart = Cart::new();

        cart.add("Apple", 2, price(150)).unwrap();
        // A different (valid) price on the merge is deliberately ignored.
        cart.add("Apple", 1, price(999)).unwrap();

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items, vec![LineItem::new("Apple", 3, price(150))]);
        assert_eq!(snapshot.total, price(450)); // 3 × 1.50, not repriced
    }

    #[test]
    fn test_names_match_case_sensitively() {
        let mut cart = Cart::new();

        assert_eq!(cart.add("Apple", 1, price(150)).unwrap(), AddOutcome::Added);
        assert_eq!(cart.add("apple", 1, price(150)).unwrap(), AddOutcome::Added);

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();
        let before = cart.snapshot();

        // Non-positive quantity
        assert!(matches!(
            cart.add("Banana", 0, price(99)),
            Err(ValidationError::MustBePositive { ref field }) if field == "quantity"
        ));
        assert!(matches!(
            cart.add("Banana", -3, price(99)),
            Err(ValidationError::MustBePositive { ref field }) if field == "quantity"
        ));

        // Non-positive price
        assert!(matches!(
            cart.add("Banana", 1, Money::zero()),
            Err(ValidationError::MustBePositive { ref field }) if field == "unit price"
        ));
        assert!(matches!(
            cart.add("Banana", 1, price(-99)),
            Err(ValidationError::MustBePositive { ref field }) if field == "unit price"
        ));

        // Blank name
        assert!(matches!(
            cart.add("   ", 1, price(99)),
            Err(ValidationError::Required { ref field }) if field == "name"
        ));

        // Every rejection above was a complete no-op.
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_add_validates_before_merging() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();

        // Invalid input under an existing name must not touch that line.
        assert!(cart.add("Apple", 0, price(150)).is_err());
        assert!(cart.add("Apple", 1, Money::zero()).is_err());

        assert_eq!(
            cart.snapshot().items,
            vec![LineItem::new("Apple", 2, price(150))]
        );
    }

    #[test]
    fn test_merge_quantity_overflow_rejected() {
        let mut cart = Cart::new();
        cart.add("Apple", i64::MAX, price(1)).unwrap();

        let err = cart.add("Apple", 1, price(1)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "quantity"
        ));

        // The rejection was a no-op and the line still totals cleanly.
        let snapshot = cart.snapshot();
        assert_eq!(
            snapshot.items,
            vec![LineItem::new("Apple", i64::MAX, price(1))]
        );
        assert_eq!(snapshot.total, price(i64::MAX));
    }

    #[test]
    fn test_merge_total_overflow_rejected() {
        let mut cart = Cart::new();
        cart.add("Apple", 1, price(i64::MAX)).unwrap();

        // One more unit is a fine quantity, but the stored price puts the
        // merged line total past what Money can carry.
        let err = cart.add("Apple", 1, price(1)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "total"
        ));
        assert_eq!(
            cart.snapshot().items,
            vec![LineItem::new("Apple", 1, price(i64::MAX))]
        );
    }

    #[test]
    fn test_line_total_overflow_rejected() {
        let mut cart = Cart::new();

        let err = cart.add("Apple", i64::MAX, price(2)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "total"
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_total_overflow_rejected() {
        let mut cart = Cart::new();
        cart.add("Apple", i64::MAX, price(1)).unwrap();
        let before = cart.snapshot();

        // The second line is fine on its own; it is the sum of the two
        // line totals that cannot be represented.
        let err = cart.add("Orange", 1, price(1)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overflow { ref field } if field == "total"
        ));
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_remove_missing_name() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();
        let before = cart.snapshot();

        let err = cart.remove("Pear").unwrap_err();
        assert_eq!(err.name, "Pear");
        assert_eq!(cart.snapshot(), before);

        // Exact matching: close is not a match.
        assert!(cart.remove("apple").is_err());
        assert!(cart.remove("Apple ").is_err());
    }

    #[test]
    fn test_remove_only_item_leaves_empty_cart() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();

        cart.remove("Apple").unwrap();

        assert!(cart.is_empty());
        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, Money::zero());
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut cart = Cart::new();
        cart.add("Apple", 1, price(150)).unwrap();
        cart.add("Orange", 1, price(200)).unwrap();
        cart.add("Banana", 1, price(99)).unwrap();

        cart.remove("Orange").unwrap();

        let snapshot = cart.snapshot();
        let names: Vec<&str> = snapshot.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_reinsert_after_remove_goes_to_the_end() {
        let mut cart = Cart::new();
        cart.add("Apple", 1, price(150)).unwrap();
        cart.add("Orange", 1, price(200)).unwrap();

        cart.remove("Apple").unwrap();
        cart.add("Apple", 1, price(150)).unwrap();

        let snapshot = cart.snapshot();
        let names: Vec<&str> = snapshot.items.iter().map(|i| i.name.as_str()).collect();
        // A removed name that comes back is a fresh insertion, not a
        // resurrection of its old position.
        assert_eq!(names, vec!["Orange", "Apple"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();
        cart.add("Orange", 3, price(200)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();

        assert!(cart.is_empty());
        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, Money::zero());

        // Clearing an empty cart is fine too.
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_recomputed_on_demand() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());

        cart.add("Apple", 2, price(150)).unwrap();
        assert_eq!(cart.total(), price(300));

        cart.add("Apple", 1, price(150)).unwrap();
        assert_eq!(cart.total(), price(450));

        cart.remove("Apple").unwrap();
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut cart = Cart::new();

        assert_eq!(cart.add("Apple", 2, price(150)).unwrap(), AddOutcome::Added);
        assert_eq!(
            cart.add("Orange", 3, price(200)).unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            cart.add("Apple", 1, price(150)).unwrap(),
            AddOutcome::Merged
        );

        let snapshot = cart.snapshot();
        assert_eq!(
            snapshot.items,
            vec![
                LineItem::new("Apple", 3, price(150)),
                LineItem::new("Orange", 3, price(200)),
            ]
        );
        assert_eq!(snapshot.total, price(1050)); // 4.50 + 6.00

        cart.remove("Apple").unwrap();
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items, vec![LineItem::new("Orange", 3, price(200))]);
        assert_eq!(snapshot.total, price(600));

        cart.clear();
        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, Money::zero());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut cart = Cart::new();
        cart.add("Apple", 2, price(150)).unwrap();

        let mut view = cart.snapshot();
        view.items.push(LineItem::new("Smuggled", 99, price(1)));
        view.items[0].quantity = 1_000_000;
        view.total = Money::zero();

        // None of the scribbling above reached the cart.
        let fresh = cart.snapshot();
        assert_eq!(fresh.items, vec![LineItem::new("Apple", 2, price(150))]);
        assert_eq!(fresh.total, price(300));
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let mut cart = Cart::new();
        cart.add("Apple", 3, price(150)).unwrap();

        let json = serde_json::to_value(cart.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "name": "Apple", "quantity": 3, "unitPrice": 150 }],
                "total": 450
            })
        );
    }

    #[test]
    fn test_add_outcome_wire_shape() {
        assert_eq!(
            serde_json::to_value(AddOutcome::Added).unwrap(),
            serde_json::json!("added")
        );
        assert_eq!(
            serde_json::to_value(AddOutcome::Merged).unwrap(),
            serde_json::json!("merged")
        );

        let merged: AddOutcome = serde_json::from_value(serde_json::json!("merged")).unwrap();
        assert_eq!(merged, AddOutcome::Merged);
    }

    #[test]
    fn test_default_is_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
