//! Deck tool handlers.
//!
//! - configureDeck: resolve deck settings, no persistence
//! - selectDeck: list saved decks
//! - saveDeck: persist a deck and return its id

use serde_json::Value;
use tracing::{debug, error, info};

use crate::tools::tool_names;

use super::super::Handlers;
use super::deck_dtos::{
    ConfigureDeckRequest, ConfigureDeckResponse, SaveDeckRequest, SaveDeckResponse,
    SelectDeckRequest, SelectDeckResponse,
};
use super::envelope::ToolOutput;
use super::error::ToolError;

impl Handlers {
    /// Handle configureDeck.
    ///
    /// Absent settings fall back to spanish / 10 / beginner, and the
    /// response echoes the effective values.
    pub(crate) async fn call_configure_deck(
        &self,
        arguments: Value,
    ) -> Result<ToolOutput, ToolError> {
        debug!("Handling configureDeck");

        let config = self.parse_request_validated::<ConfigureDeckRequest>(
            arguments,
            tool_names::CONFIGURE_DECK,
        )?;
        let response = ConfigureDeckResponse::from(config);

        debug!(
            language = %response.study_language,
            deck_length = response.deck_length,
            difficulty = %response.difficulty,
            "configureDeck: settings resolved"
        );
        ToolOutput::new(&response, response.narration())
    }

    /// Handle selectDeck.
    pub(crate) async fn call_select_deck(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        debug!("Handling selectDeck");

        let user_id = self
            .parse_request_validated::<SelectDeckRequest>(arguments, tool_names::SELECT_DECK)?;

        let decks = self.store.list(user_id.as_deref()).await.map_err(|e| {
            error!(error = %e, user_id = ?user_id, "selectDeck: Failed to list decks");
            ToolError::from(e)
        })?;

        debug!(count = decks.len(), user_id = ?user_id, "selectDeck: decks listed");
        let response = SelectDeckResponse { decks };
        ToolOutput::new(&response, response.narration())
    }

    /// Handle saveDeck.
    ///
    /// The id comes from the store; nothing is written unless every card
    /// validated.
    pub(crate) async fn call_save_deck(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        debug!("Handling saveDeck");

        let deck =
            self.parse_request_validated::<SaveDeckRequest>(arguments, tool_names::SAVE_DECK)?;

        let deck_id = self.store.save(deck.clone()).await.map_err(|e| {
            error!(error = %e, name = %deck.name, "saveDeck: Failed to save deck");
            ToolError::from(e)
        })?;

        info!(
            deck_id = %deck_id,
            cards = deck.card_count(),
            language = %deck.language,
            "saveDeck: Deck saved"
        );
        let response = SaveDeckResponse { deck_id };
        ToolOutput::new(&response, response.narration(&deck))
    }
}
