//! # Shopping Cart
//!
//! Quantity-aggregated lines keyed by plant id. The total is never stored;
//! [`Cart::total`] and [`Cart::view`] recompute it from the lines every time.

use crate::catalog::PlantId;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub plant_id: PlantId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// A fully computed row, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub plant_id: PlantId,
    pub name: String,
    pub quantity: u32,
    pub subtotal: u64,
}

/// Everything the cart panel draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    Empty { message: &'static str },
    Lines { rows: Vec<CartRow>, total: u64 },
}

impl CartView {
    pub fn total(&self) -> u64 {
        match self {
            CartView::Empty { .. } => 0,
            CartView::Lines { total, .. } => *total,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit. An existing line for `plant_id` gets its quantity bumped;
    /// otherwise a new line is appended.
    pub fn add(&mut self, plant_id: PlantId, name: &str, unit_price: u64) {
        match self.lines.iter_mut().find(|line| line.plant_id == plant_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                plant_id,
                name: name.to_string(),
                unit_price,
                quantity: 1,
            }),
        }
    }

    /// Remove the whole line for `plant_id`. Returns `false` if there was none.
    pub fn remove(&mut self, plant_id: PlantId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.plant_id != plant_id);
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Number of units across all lines.
    pub fn units(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, u32::saturating_add)
    }

    pub fn view(&self) -> CartView {
        if self.lines.is_empty() {
            return CartView::Empty {
                message: EMPTY_CART_MESSAGE,
            };
        }
        let rows = self
            .lines
            .iter()
            .map(|line| CartRow {
                plant_id: line.plant_id,
                name: line.name.clone(),
                quantity: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect();
        CartView::Lines {
            rows,
            total: self.total(),
        }
    }
}

/// Format an amount with the configured currency symbol, e.g. `৳1200`.
pub fn format_price(symbol: &str, amount: u64) -> String {
    format!("{symbol}{amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_plant_aggregates_into_one_line() {
        let mut cart = Cart::new();
        cart.add(1, "Mango", 500);
        cart.add(1, "Mango", 500);
        cart.add(2, "Rose", 200);

        assert_eq!(
            cart.view(),
            CartView::Lines {
                rows: vec![
                    CartRow {
                        plant_id: 1,
                        name: "Mango".to_string(),
                        quantity: 2,
                        subtotal: 1000,
                    },
                    CartRow {
                        plant_id: 2,
                        name: "Rose".to_string(),
                        quantity: 1,
                        subtotal: 200,
                    },
                ],
                total: 1200,
            }
        );
    }

    #[test]
    fn test_empty_cart_view() {
        let cart = Cart::new();
        let view = cart.view();
        assert_eq!(
            view,
            CartView::Empty {
                message: "Your cart is empty."
            }
        );
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = Cart::new();
        cart.add(1, "Mango", 500);
        cart.add(1, "Mango", 500);
        assert!(cart.remove(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(1, "Mango", 500);
        assert!(!cart.remove(42));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), 500);
    }

    #[test]
    fn test_total_tracks_any_sequence() {
        let mut cart = Cart::new();
        let ops: [(bool, PlantId, u64); 7] = [
            (true, 1, 300),
            (true, 2, 150),
            (true, 1, 300),
            (false, 2, 0),
            (true, 3, 75),
            (false, 9, 0),
            (true, 3, 75),
        ];
        for (add, id, price) in ops {
            if add {
                cart.add(id, "plant", price);
            } else {
                cart.remove(id);
            }
            let expected: u64 = cart
                .lines()
                .iter()
                .map(|l| l.unit_price * u64::from(l.quantity))
                .sum();
            assert_eq!(cart.total(), expected);
        }
        assert_eq!(cart.total(), 750);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let mut cart = Cart::new();
        cart.add(1, "Golden Bonsai", u64::MAX);
        cart.add(1, "Golden Bonsai", u64::MAX);
        cart.add(2, "Rose", 200);

        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].subtotal(), u64::MAX);
        assert_eq!(cart.total(), u64::MAX);
        assert_eq!(cart.view().total(), u64::MAX);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("৳", 1200), "৳1200");
        assert_eq!(format_price("$", 0), "$0");
    }
}
