//! MCP method dispatch functions.
//!
//! Each sub-module handles one method as a free function returning the
//! `result` payload or a `DispatchError`, keeping `McpHandler` itself thin
//! (envelope checks + routing only).

pub(crate) mod completion;
pub(crate) mod initialize;
pub(crate) mod tools_call;
pub(crate) mod tools_list;
