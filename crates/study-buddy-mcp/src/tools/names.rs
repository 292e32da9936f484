//! Tool names as constants for dispatch matching.

// ========== DECK TOOLS ==========

pub const CONFIGURE_DECK: &str = "configureDeck";
pub const SELECT_DECK: &str = "selectDeck";
pub const SAVE_DECK: &str = "saveDeck";

// ========== SESSION TOOLS ==========

pub const START_STUDY_SESSION: &str = "startStudySession";
pub const START_STUDY_SESSION_FROM_SCRATCH: &str = "startStudySessionFromScratch";
pub const START_STUDY_SESSION_FROM_DECK: &str = "startStudySessionFromDeck";

// ========== ALIASES ==========

/// Earlier name of `configureDeck`, still accepted by `tools/call`.
pub const CREATE_FLASHCARD_DECK: &str = "createFlashcardDeck";
