/**
 * Server-Side Loader
 *
 * Builds the board page's props for an authenticated request: queries the
 * store for every task owned by the session's user, attaches the
 * display-formatted creation date to each, and pairs the list with the
 * user summary. Session resolution (and the unauthenticated redirect)
 * happens in the page handler; this loader only runs with a session in
 * hand.
 *
 * There is no pagination and no limit — the page shows everything the
 * user owns. A store failure propagates to the caller, which surfaces it
 * as a 500 rather than crashing.
 */

use serde::{Deserialize, Serialize};

use crate::board::dates::format_created;
use crate::board::task::{BoardUser, Task};
use crate::session::Session;
use crate::store::{StoreError, TaskStore};

/// Input data for rendering the board page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardProps {
    /// Session-derived user summary
    pub user: BoardUser,
    /// The user's tasks, oldest first, with formatted dates attached
    pub tasks: Vec<Task>,
}

/// Load the board props for a resolved session
pub async fn load_board(
    store: &dyn TaskStore,
    session: &Session,
) -> Result<BoardProps, StoreError> {
    let mut tasks = store.list_for_owner(&session.user_id).await?;

    for task in &mut tasks {
        task.created_formatted = Some(format_created(&task.created));
    }

    Ok(BoardProps {
        user: BoardUser::from_session(session),
        tasks,
    })
}
