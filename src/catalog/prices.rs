use rust_decimal::Decimal;

use super::PriceRange;

/// One of the fixed price choices offered next to the category checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub id: u8,
    pub name: &'static str,
    low: i64,
    high: i64,
}

impl PriceBucket {
    const fn new(id: u8, name: &'static str, low: i64, high: i64) -> Self {
        Self { id, name, low, high }
    }

    pub fn range(&self) -> PriceRange {
        PriceRange::between_unchecked(Decimal::from(self.low), Decimal::from(self.high))
    }

    pub fn find(id: u8) -> Option<&'static PriceBucket> {
        PRICE_BUCKETS.iter().find(|bucket| bucket.id == id)
    }
}

pub const PRICE_BUCKETS: [PriceBucket; 6] = [
    PriceBucket::new(0, "$0 to 19", 0, 19),
    PriceBucket::new(1, "$20 to 39", 20, 39),
    PriceBucket::new(2, "$40 to 59", 40, 59),
    PriceBucket::new(3, "$60 to 79", 60, 79),
    PriceBucket::new(4, "$80 to 99", 80, 99),
    PriceBucket::new(5, "$100 or more", 100, 9999),
];
