//! Finance API access.
//!
//! Tools shape an [`ApiRequest`] and hand it to a [`FinanceApi`]. The
//! production implementation is [`BudgetscoClient`]; tests substitute
//! their own.

mod client;
mod error;
mod request;

pub use client::{ApiResponse, BudgetscoClient, FinanceApi};
pub use error::{ApiError, UpstreamError};
pub use request::{ApiRequest, QueryParams};
