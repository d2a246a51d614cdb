/**
 * Board Page
 *
 * Everything the task-board page is made of: the task and user types, the
 * server-side loader that builds the page props, the stateful board view
 * driving the four mutations, the supporter panel, and date formatting.
 */

pub mod dates;
pub mod loader;
pub mod supporter;
pub mod task;
pub mod view;

pub use loader::{load_board, BoardProps};
pub use task::{BoardUser, Task};
pub use view::BoardView;
