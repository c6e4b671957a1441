//! Client side of the catalog browsing protocol: an HTTP API wrapper and the
//! view state machine that decides which endpoint to call.

mod api;
mod controller;
mod error;
mod view;

pub use api::{CatalogApi, HttpCatalogClient};
pub use controller::CatalogController;
pub use error::{ClientError, ClientResult};
pub use view::{CatalogView, Fetch, FetchMode};
