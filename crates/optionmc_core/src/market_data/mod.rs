//! Market data: quotes, yield curves, Black volatility surfaces, and
//! versioned market snapshots.

pub mod curves;
pub mod error;
pub mod quote;
pub mod snapshot;
pub mod surfaces;

pub use error::MarketDataError;
pub use quote::SimpleQuote;
pub use snapshot::MarketSnapshot;
