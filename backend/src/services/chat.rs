//! Chat service - runs the chatbot against the diary and applies the
//! actions its replies carry

use crate::error::ApiError;
use crate::services::diary::record_entry;
use crate::state::welcome_message;
use crate::storage::DiaryStore;
use chrono::NaiveDateTime;
use healthy_diary_shared::catalog::Catalog;
use healthy_diary_shared::chat::{ChatAction, ChatEngine, UserContext};
use healthy_diary_shared::models::ChatMessage;
use healthy_diary_shared::types::{ChatReplyResponse, ChatRequest};
use tokio::sync::Mutex;
use tracing::{debug, info};
use validator::Validate;

/// Messages kept per session, the welcome message included
pub const MAX_CHAT_HISTORY: usize = 100;

pub struct ChatService;

impl ChatService {
    /// Answer a message, as of the local time `now`
    ///
    /// A meal or exercise the reply proposes is written to the diary dated
    /// `now` before the reply is returned.
    pub async fn send(
        store: &DiaryStore,
        session: &Mutex<Vec<ChatMessage>>,
        catalog: &Catalog,
        req: ChatRequest,
        now: NaiveDateTime,
    ) -> Result<ChatReplyResponse, ApiError> {
        req.validate()?;
        let message = req.message.trim().to_string();
        if message.is_empty() {
            return Err(ApiError::validation("메시지를 입력해주세요"));
        }

        let (analysis, response) = {
            let data = store.read().await;
            let context = UserContext {
                user: data.user.as_ref(),
                goal: data.goal.as_ref(),
                diet_records: &data.diet_records,
                exercise_logs: &data.exercise_logs,
            };
            ChatEngine::new(catalog).reply(&message, &context, now)
        };

        debug!(
            intent = analysis.intent.as_str(),
            confidence = analysis.confidence,
            has_action = response.action.is_some(),
            "Chat message classified"
        );
        metrics::counter!("chat_messages_total", "intent" => analysis.intent.as_str()).increment(1);

        if let Some(action) = response.action.clone() {
            Self::apply(store, action, now).await?;
        }

        let reply = ChatMessage::assistant(response.message, response.action.clone());
        {
            let mut history = session.lock().await;
            history.push(ChatMessage::user(message));
            history.push(reply.clone());
            trim_history(&mut history);
        }

        Ok(ChatReplyResponse {
            intent: analysis.intent,
            confidence: analysis.confidence,
            reply,
            applied_action: response.action,
        })
    }

    async fn apply(store: &DiaryStore, action: ChatAction, now: NaiveDateTime) -> Result<(), ApiError> {
        let kind = action.kind();
        let date = now.date();

        match action {
            ChatAction::AddMeal(meal) => {
                let record = store
                    .update(move |data| {
                        let record = meal.into_record(data.user_id(), date);
                        data.add_diet_record(record).clone()
                    })
                    .await?;
                record_entry("diet");
                info!(record_id = %record.id, calories = record.total_calories, "Meal added from chat");
            }
            ChatAction::AddExercise(exercise) => {
                let log = store
                    .update(move |data| {
                        let log = exercise.into_log(data.user_id(), date);
                        data.add_exercise_log(log).clone()
                    })
                    .await?;
                record_entry("exercise");
                info!(log_id = %log.id, calories = log.calories_burned, "Exercise added from chat");
            }
        }

        metrics::counter!("chat_actions_total", "type" => kind).increment(1);
        Ok(())
    }

    pub async fn history(session: &Mutex<Vec<ChatMessage>>) -> Vec<ChatMessage> {
        session.lock().await.clone()
    }

    /// Start over with only the welcome message
    pub async fn clear(session: &Mutex<Vec<ChatMessage>>) {
        let mut history = session.lock().await;
        history.clear();
        history.push(welcome_message());
    }
}

/// Drop the oldest messages after the opening one
fn trim_history(history: &mut Vec<ChatMessage>) {
    if history.len() > MAX_CHAT_HISTORY {
        let excess = history.len() - MAX_CHAT_HISTORY;
        history.drain(1..=excess);
    }
}
