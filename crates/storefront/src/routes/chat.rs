//! Chat route handlers.
//!
//! The chat panel drives the assistant: every send runs the command
//! interpreter under one state lock, then returns the refreshed messages
//! fragment. Commands can mutate the cart, so replies also fire the
//! `cart-updated` trigger.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use velvet_lane_core::{ChatMessage, ChatRole};

use crate::assistant::{
    Assistant, VOICE_ERROR_REPLY, VOICE_LISTENING_REPLY, VOICE_UNSUPPORTED_REPLY,
};
use crate::state::AppState;

/// Message display data for templates.
#[derive(Clone)]
pub struct MessageView {
    /// CSS class: "user" or "assistant".
    pub role: &'static str,
    pub content: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: match message.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            },
            content: message.content.clone(),
        }
    }
}

/// Chat messages fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_messages.html")]
pub struct ChatMessagesTemplate {
    pub messages: Vec<MessageView>,
    /// Whether the assistant is waiting for a delivery address.
    pub awaiting_address: bool,
}

/// Send message form data.
#[derive(Debug, Deserialize)]
pub struct SendMessageForm {
    pub message: String,
}

/// Voice adapter outcome, reported by the browser-side capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceStatus {
    Listening,
    Error,
    Unsupported,
}

/// Voice status form data.
#[derive(Debug, Deserialize)]
pub struct VoiceStatusForm {
    pub status: VoiceStatus,
}

/// Render the current conversation log as a fragment.
fn messages_fragment(state: &AppState) -> ChatMessagesTemplate {
    let shop = state.shop();
    ChatMessagesTemplate {
        messages: shop.messages().iter().map(MessageView::from).collect(),
        awaiting_address: shop.checkout().is_some(),
    }
}

/// Get the chat messages fragment (HTMX).
#[instrument(skip(state))]
pub async fn messages(State(state): State<AppState>) -> impl IntoResponse {
    messages_fragment(&state)
}

/// Send a message to the assistant (HTMX).
///
/// Blank messages are ignored (the UI disables sending them, but the
/// endpoint tolerates them). Voice transcripts arrive through this same
/// endpoint and are indistinguishable from typed input.
#[instrument(skip(state, form))]
pub async fn send(State(state): State<AppState>, Form(form): Form<SendMessageForm>) -> Response {
    if !form.message.trim().is_empty() {
        let mut shop = state.shop();
        Assistant::new(state.catalog()).handle_message(&mut shop, &form.message);
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        messages_fragment(&state),
    )
        .into_response()
}

/// Surface a voice adapter outcome as an assistant message (HTMX).
#[instrument(skip(state))]
pub async fn voice(
    State(state): State<AppState>,
    Form(form): Form<VoiceStatusForm>,
) -> impl IntoResponse {
    let reply = match form.status {
        VoiceStatus::Listening => VOICE_LISTENING_REPLY,
        VoiceStatus::Error => VOICE_ERROR_REPLY,
        VoiceStatus::Unsupported => VOICE_UNSUPPORTED_REPLY,
    };
    state.shop().push_message(ChatRole::Assistant, reply);

    messages_fragment(&state)
}
