//! Catalog browsing rules shared by the query service and the view client:
//! page numbering, price ranges, filter validation and the mapping from a
//! user's filter selection to the request that should be issued.

mod filter;
mod page;
mod prices;
mod slug;

pub use filter::{CatalogRequest, FilterSelection, PriceRange, ProductFilter};
pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use prices::{PRICE_BUCKETS, PriceBucket};
pub use slug::slugify;
