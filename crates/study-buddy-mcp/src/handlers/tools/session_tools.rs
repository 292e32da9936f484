//! Study session tool handlers.

use serde_json::Value;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use study_buddy_core::CoreError;

use crate::tools::tool_names;

use super::super::Handlers;
use super::envelope::ToolOutput;
use super::error::ToolError;
use super::session_dtos::{
    DeckSessionResponse, StudySessionFromDeckRequest, StudySessionRequest, StudySessionResponse,
};

impl Handlers {
    /// Handle startStudySession and startStudySessionFromScratch.
    ///
    /// Both are pass-through: the caller's deck is echoed back unchanged
    /// and nothing is persisted.
    pub(crate) async fn call_start_study_session(
        &self,
        arguments: Value,
        tool_name: &str,
    ) -> Result<ToolOutput, ToolError> {
        debug!(tool = tool_name, "Handling study session start");

        let session = self.parse_request_validated::<StudySessionRequest>(arguments, tool_name)?;
        let response = StudySessionResponse::from(session);

        info!(
            tool = tool_name,
            cards = response.deck.len(),
            language = %response.study_language,
            difficulty = %response.difficulty,
            "Study session started"
        );
        ToolOutput::new(&response, response.narration())
    }

    /// Handle startStudySessionFromDeck.
    pub(crate) async fn call_start_study_session_from_deck(
        &self,
        arguments: Value,
    ) -> Result<ToolOutput, ToolError> {
        debug!("Handling startStudySessionFromDeck");

        let raw_id = self.parse_request_validated::<StudySessionFromDeckRequest>(
            arguments,
            tool_names::START_STUDY_SESSION_FROM_DECK,
        )?;

        // Stores only issue UUIDs, so anything else cannot name a deck.
        let Ok(deck_id) = Uuid::parse_str(&raw_id) else {
            warn!(deck_id = %raw_id, "startStudySessionFromDeck: Deck not found");
            return Err(ToolError::NotFound { deck_id: raw_id });
        };

        let deck = match self.store.load(deck_id).await {
            Ok(deck) => deck,
            Err(e @ CoreError::DeckNotFound { .. }) => {
                warn!(deck_id = %deck_id, "startStudySessionFromDeck: Deck not found");
                return Err(e.into());
            }
            Err(e) => {
                error!(error = %e, deck_id = %deck_id, "startStudySessionFromDeck: Failed to load deck");
                return Err(e.into());
            }
        };

        info!(
            deck_id = %deck_id,
            cards = deck.card_count(),
            "Study session started from saved deck"
        );
        let response = DeckSessionResponse::from(deck);
        ToolOutput::new(&response, response.narration())
    }
}
