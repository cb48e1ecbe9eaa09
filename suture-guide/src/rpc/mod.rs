//! JSON-RPC 2.0 bridge to a hosting web page.
//!
//! On wasm32 the app runs inside an iframe and exchanges `postMessage` strings
//! with its parent window. Natively the queues are still filled and drained,
//! but nothing leaves the process.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)  <──postMessage──>  Bevy (iframe)
//!        │                                     │
//!        ├─ Request (with ID) ───────────────> │
//!        │ <──────────────── Response (with ID)┤
//!        │ <───────── step_changed (no ID) ────┤
//! ```
//!
//! ## Methods
//!
//! - `get_tutorial_state`: current step id, label, ordinal, completed passes,
//!   whether the feedback window is running and whether anything is held.
//!
//! ## Notifications
//!
//! - `step_changed`: sent for every step transition with
//!   `{ step, label, ordinal, pass }`.
//!
//! The step events come from the tutorial plugin, which registers them.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found

/// Request handling, notification forwarding and the WASM message listener.
pub mod web_rpc;
