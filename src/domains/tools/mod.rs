//! Tools domain module.
//!
//! Every Budgetsco operation is exposed as an MCP tool. A tool validates its
//! arguments locally, shapes exactly one request to the finance API and
//! returns the response payload as JSON text.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per API area
//! - `handlers.rs` - The `FinanceTool` trait and the shared executor
//! - `router.rs` - ToolRouter builder for the STDIO transport
//! - `registry.rs` - Tool listing and dispatch for the HTTP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `FinanceTool` in the matching file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Register it in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
