//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;

/// Largest number of hundredths a price can hold (999.99).
pub const MAX_PRICE_CENTS: i64 = 99_999;

/// Fixed-point scale of every price.
pub const PRICE_SCALE: u32 = 2;

/// Smallest and largest quantity on an order line.
pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 10;

/// Generate a price: a random number of up to five digits read as hundredths.
pub fn generate_price<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let cents = rng.random_range(0..=MAX_PRICE_CENTS);
    Decimal::new(cents, PRICE_SCALE)
}

/// Generate an order line quantity in `[MIN_QUANTITY, MAX_QUANTITY]`.
pub fn generate_quantity<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(MIN_QUANTITY..=MAX_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_price() {
        let mut rng = StdRng::seed_from_u64(42);
        let max = Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE);

        for _ in 0..500 {
            let price = generate_price(&mut rng);
            assert_eq!(price.scale(), PRICE_SCALE);
            assert!(price >= Decimal::ZERO);
            assert!(price <= max);
        }
    }

    #[test]
    fn test_price_formats_with_two_decimals() {
        assert_eq!(Decimal::new(0, PRICE_SCALE).to_string(), "0.00");
        assert_eq!(Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE).to_string(), "999.99");
    }

    #[test]
    fn test_generate_quantity() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            let quantity = generate_quantity(&mut rng);
            assert!((MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity));
            seen[(quantity - 1) as usize] = true;
        }

        // Both bounds are reachable
        assert!(seen.iter().all(|s| *s));
    }
}
