//! Agent tools
//!
//! Capabilities published to the external agent runtime.

mod product_search;
mod registry;
mod traits;

pub use product_search::{ProductSearchTool, PRODUCT_SEARCH_TOOL};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolDescriptor};
