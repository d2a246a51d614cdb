/**
 * Routes
 *
 * HTTP surface of the application: the router, the server-rendered pages,
 * and the task API.
 */

pub mod api;
pub mod page;
pub mod router;

pub use router::create_router;
