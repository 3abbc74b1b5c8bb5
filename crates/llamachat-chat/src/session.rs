use chrono::{DateTime, Utc};
use uuid::Uuid;

use llamachat_api::{ChatClient, ChatReply};
use llamachat_models::{ChatError, ModelConfig, Role, Turn};

/// One user's continuous interaction window.
///
/// Owns the ordered transcript and the active model configuration.
/// Constructed and torn down by the caller; there is no implicit
/// framework-level lifecycle and no cross-session sharing. Turns are
/// append-only and the transcript is unbounded - matching the
/// front-ends this core was extracted from, nothing is evicted.
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    turns: Vec<Turn>,
    config: ModelConfig,
}

impl Session {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            turns: Vec::new(),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a turn to the end of the transcript. Always succeeds.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Empty the transcript. Idempotent; the active config survives.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn current_config(&self) -> &ModelConfig {
        &self.config
    }

    /// Replace the configuration wholesale. No merge with the prior
    /// config and no clamping - values are stored exactly as given.
    pub fn set_config(&mut self, config: ModelConfig) {
        self.config = config;
    }

    /// Drive one respond+append cycle: send `input` to the backend,
    /// then record the user turn and the assistant turn (with its
    /// latency) in that order. On error nothing is appended.
    pub async fn send(&mut self, client: &ChatClient, input: &str) -> Result<ChatReply, ChatError> {
        let reply = client.respond(&self.config, &self.turns, input).await?;

        self.append(Turn::user(input));
        self.append(Turn::assistant(reply.text.clone()).with_latency(reply.latency));

        Ok(reply)
    }

    /// Concatenate the transcript into a plain `Q: ...\nA: ...` text
    /// blob for download. Presentation convenience, not a data format.
    pub fn export_transcript(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();
        let mut open_question = false;

        for turn in &self.turns {
            match turn.role {
                Role::User => {
                    blocks.push(format!("Q: {}", turn.text));
                    open_question = true;
                }
                Role::Assistant => {
                    match blocks.last_mut() {
                        Some(block) if open_question => {
                            block.push_str(&format!("\nA: {}", turn.text));
                        }
                        _ => blocks.push(format!("A: {}", turn.text)),
                    }
                    open_question = false;
                }
            }
        }

        blocks.join("\n\n")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}
