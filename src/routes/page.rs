/**
 * Page Handlers
 *
 * Server-rendered pages. The board page resolves the caller's session,
 * redirects unauthenticated requests to the root path, and otherwise
 * renders the task list with the page props embedded as JSON (the client
 * script reads them from the `__BOARD_STATE__` block and drives the task
 * API from there).
 */

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::board::loader::{load_board, BoardProps};
use crate::board::supporter;
use crate::server::state::AppState;

/// Landing page, the redirect target for unauthenticated board requests
///
/// Sign-in itself belongs to the external auth service; this page only
/// points at the board.
pub async fn landing_page() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\
         <html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
         <title>Board</title>\
         <link rel=\"stylesheet\" href=\"/static/styles.css\">\
         </head><body>\
         <main class=\"container\">\
         <h1>Organizando suas tarefas.</h1>\
         <p><a href=\"/board\">Acessar meu board</a></p>\
         </main></body></html>",
    )
}

/// The board page
///
/// - No resolvable session: 307 redirect to `/`, nothing rendered.
/// - Store failure while loading: logged and answered with a 500 instead
///   of crashing the request task.
pub async fn board_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(session) = state.sessions.resolve(&headers) else {
        return Redirect::temporary("/").into_response();
    };

    match load_board(state.store.as_ref(), &session).await {
        Ok(props) => Html(render_board(&props)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load board for {}: {}", session.user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Render the board markup with the embedded page state
fn render_board(props: &BoardProps) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str(
        "<!DOCTYPE html>\
         <html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
         <title>Minhas Tarefas - Board</title>\
         <link rel=\"stylesheet\" href=\"/static/styles.css\">\
         </head><body>\
         <main class=\"container\">",
    );

    html.push_str(
        "<form id=\"task-form\">\
         <input type=\"text\" id=\"task-input\" placeholder=\"Digite sua tarefa...\">\
         <button type=\"submit\">+</button>\
         </form>",
    );

    let count = props.tasks.len();
    let noun = if count == 1 { "tarefa" } else { "tarefas" };
    html.push_str(&format!("<h1>Você tem {} {}!</h1>", count, noun));

    html.push_str("<section class=\"task-list\">");
    for task in &props.tasks {
        html.push_str("<article class=\"task\" data-id=\"");
        html.push_str(&escape_html(&task.id));
        html.push_str("\"><p>");
        html.push_str(&escape_html(&task.task));
        html.push_str("</p><div class=\"actions\"><time>");
        html.push_str(&escape_html(task.created_formatted.as_deref().unwrap_or("")));
        html.push_str("</time>");
        if props.user.vip {
            html.push_str("<button class=\"edit\">Editar</button>");
        }
        html.push_str("<button class=\"delete\">Excluir</button></div></article>");
    }
    html.push_str("</section></main>");

    if props.user.vip {
        html.push_str("<footer class=\"vip\"><h3>Obrigado por apoiar esse projeto.</h3>");
        if let Some(line) = supporter::donation_line(&props.user) {
            html.push_str("<time>");
            html.push_str(&escape_html(&line));
            html.push_str("</time>");
        }
        html.push_str("</footer>");
    }

    // Embedded page state, read by the client script. "</" is escaped so
    // task text cannot close the script block early.
    let state_json = serde_json::to_string(props)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");
    html.push_str("<script id=\"__BOARD_STATE__\" type=\"application/json\">");
    html.push_str(&state_json);
    html.push_str("</script>");

    html.push_str("<script src=\"/static/board.js\"></script></body></html>");
    html
}

/// Minimal HTML escaping for text interpolated into the markup
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::task::{BoardUser, Task};
    use chrono::{TimeZone, Utc};

    fn props(vip: bool) -> BoardProps {
        BoardProps {
            user: BoardUser {
                id: "u1".to_string(),
                name: "Ana".to_string(),
                vip,
                last_donate: None,
            },
            tasks: vec![Task {
                id: "1".to_string(),
                created: Utc.with_ymd_and_hms(2024, 8, 17, 9, 0, 0).unwrap(),
                created_formatted: Some("17 August 2024".to_string()),
                task: "Buy milk </script>".to_string(),
                user_id: "u1".to_string(),
                name: "Ana".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_escapes_task_text() {
        let html = render_board(&props(false));
        assert!(html.contains("Buy milk &lt;/script&gt;"));
        assert!(html.contains("Você tem 1 tarefa!"));
    }

    #[test]
    fn test_edit_button_only_for_supporters() {
        assert!(!render_board(&props(false)).contains("class=\"edit\""));
        assert!(render_board(&props(true)).contains("class=\"edit\""));
    }

    #[test]
    fn test_embedded_state_cannot_close_script_block() {
        let html = render_board(&props(false));
        // The task text's "</script>" must arrive as "<\/script>" in the
        // embedded JSON.
        assert!(html.contains("Buy milk <\\/script>"));
        assert!(html.contains("\"userId\":\"u1\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
