//! taskboard - Main Library
//!
//! A single-page task-board web application: authenticated users view,
//! add, edit, and delete personal to-do items held in a remote document
//! store, with a supporter (VIP) feature unlocked by a donation flag on
//! the user's session.
//!
//! # Module Structure
//!
//! - **`board`** - the page itself: task types, the server-side loader,
//!   the stateful board view, the supporter panel, date formatting
//! - **`store`** - the `TaskStore` trait plus the PostgreSQL and
//!   in-memory implementations
//! - **`session`** - session types and the cookie/JWT session provider
//! - **`routes`** - the router, page handlers, and task API
//! - **`server`** - application state, configuration, initialization
//! - **`error`** - board error types and HTTP conversions
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskboard::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve app with Axum
//! # }
//! ```

pub mod board;
pub mod error;
pub mod routes;
pub mod server;
pub mod session;
pub mod store;
