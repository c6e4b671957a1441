use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{
    catalog::Page,
    error::{AppError, Result},
    models::FilterRequest,
};

/// Closed price interval `[low, high]` with `0 <= low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    low: Decimal,
    high: Decimal,
}

impl PriceRange {
    pub fn new(low: Decimal, high: Decimal) -> Result<Self> {
        if low < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Price range bounds must not be negative".to_string(),
            ));
        }

        if low > high {
            return Err(AppError::BadRequest(format!(
                "Invalid price range: {} is greater than {}",
                low, high
            )));
        }

        Ok(Self { low, high })
    }

    /// Interprets the `radio` array of a filter request: empty means no price
    /// constraint, exactly two values form a range, anything else is invalid.
    pub fn from_bounds(bounds: &[Decimal]) -> Result<Option<Self>> {
        match bounds {
            [] => Ok(None),
            [low, high] => Self::new(*low, *high).map(Some),
            _ => Err(AppError::BadRequest(format!(
                "Price range must have exactly two values, got {}",
                bounds.len()
            ))),
        }
    }

    pub(super) fn between_unchecked(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> Decimal {
        self.low
    }

    pub fn high(&self) -> Decimal {
        self.high
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.low <= price && price <= self.high
    }

    pub fn to_bounds(&self) -> [Decimal; 2] {
        [self.low, self.high]
    }
}

/// A validated server-side filter: at least one category or a price range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    categories: Vec<i32>,
    price: Option<PriceRange>,
}

impl ProductFilter {
    pub fn new<I>(categories: I, price: Option<PriceRange>) -> Result<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let categories: Vec<i32> = categories
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if categories.is_empty() && price.is_none() {
            return Err(AppError::BadRequest(
                "At least one category or a price range is required".to_string(),
            ));
        }

        Ok(Self { categories, price })
    }

    pub fn from_request(req: &FilterRequest) -> Result<Self> {
        let price = PriceRange::from_bounds(&req.radio)?;
        Self::new(req.checked.iter().copied(), price)
    }

    /// Category ids, sorted and without duplicates.
    pub fn categories(&self) -> &[i32] {
        &self.categories
    }

    pub fn price(&self) -> Option<PriceRange> {
        self.price
    }

    pub fn matches(&self, category_id: i32, price: Decimal) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.binary_search(&category_id).is_ok();
        let price_ok = self.price.is_none_or(|range| range.contains(price));

        category_ok && price_ok
    }

    pub fn to_request(&self) -> FilterRequest {
        FilterRequest {
            checked: self.categories.clone(),
            radio: self
                .price
                .map(|range| range.to_bounds().to_vec())
                .unwrap_or_default(),
        }
    }
}

/// The user's current filter choices. Values are immutable: every change
/// produces a new selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    categories: BTreeSet<i32>,
    price: Option<PriceRange>,
}

impl FilterSelection {
    pub fn toggle_category(&self, category_id: i32) -> Self {
        let mut categories = self.categories.clone();
        if !categories.remove(&category_id) {
            categories.insert(category_id);
        }

        Self {
            categories,
            price: self.price,
        }
    }

    pub fn with_price(&self, price: Option<PriceRange>) -> Self {
        Self {
            categories: self.categories.clone(),
            price,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.price.is_some()
    }

    pub fn is_selected(&self, category_id: i32) -> bool {
        self.categories.contains(&category_id)
    }

}

/// What to ask the catalog for, given a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    List { page: Page },
    Filter(ProductFilter),
}

impl CatalogRequest {
    /// An active selection always maps to an unpaginated filter request;
    /// an inactive one maps to the plain listing at `page`.
    pub fn for_selection(selection: &FilterSelection, page: Page) -> Self {
        if selection.is_active() {
            CatalogRequest::Filter(ProductFilter {
                categories: selection.categories.iter().copied().collect(),
                price: selection.price,
            })
        } else {
            CatalogRequest::List { page }
        }
    }
}
