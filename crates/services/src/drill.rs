use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Duration;
use drill_core::model::{AnswerOutcome, FrontEnd, Session, TypingSpeed, Word, WordList};
use storage::Storage;

use crate::error::DrillError;
use crate::picker::WordPicker;
use crate::translation::{Translation, TranslationSource};
use crate::Clock;

/// A word together with the translation shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub word: Word,
    pub translation: Translation,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  -  {}", self.word, self.translation)
    }
}

/// Result of submitting one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum DrillStep {
    Correct {
        speed: TypingSpeed,
        success_count: u32,
        next: Prompt,
    },
    Wrong,
    Finished {
        practiced: u32,
    },
}

/// A running session plus the prompt currently on screen.
#[derive(Debug, Clone)]
pub struct ActiveDrill {
    session: Session,
    prompt: Prompt,
}

impl ActiveDrill {
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    #[must_use]
    pub fn success_count(&self) -> u32 {
        self.session.success_count()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }
}

/// Draws words, fetches their translations and scores answers.
///
/// Shared by both front ends; each one owns its own `ActiveDrill`.
pub struct DrillService {
    clock: Clock,
    words: Arc<WordList>,
    translations: Arc<dyn TranslationSource>,
    picker: Mutex<WordPicker>,
}

impl DrillService {
    #[must_use]
    pub fn new(
        clock: Clock,
        words: Arc<WordList>,
        translations: Arc<dyn TranslationSource>,
    ) -> Self {
        Self {
            clock,
            words,
            translations,
            picker: Mutex::new(WordPicker::default()),
        }
    }

    /// Load the word list from `storage` and build a service around it.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Storage` if the list cannot be read or is empty.
    pub async fn from_storage(
        clock: Clock,
        storage: &Storage,
        translations: Arc<dyn TranslationSource>,
    ) -> Result<Self, DrillError> {
        let words = storage.load_word_list().await?;
        tracing::info!(
            source = %storage.words.describe(),
            count = words.len(),
            "word list loaded"
        );
        Ok(Self::new(clock, Arc::new(words), translations))
    }

    #[must_use]
    pub fn with_picker(mut self, picker: WordPicker) -> Self {
        self.picker = Mutex::new(picker);
        self
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_picker(WordPicker::seeded(seed))
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Advance a fixed clock; no effect on the system clock.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.clock.advance(delta);
    }

    /// Draw the first word and start its timer once the translation is in.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Translation` if the lookup fails.
    pub async fn start(&self, front_end: FrontEnd) -> Result<ActiveDrill, DrillError> {
        let prompt = self.next_prompt().await?;
        let session = Session::start(front_end, prompt.word.clone(), self.clock.now());
        tracing::debug!(?front_end, word = %prompt.word, "drill started");
        Ok(ActiveDrill { session, prompt })
    }

    /// Score one line of input. A correct answer presents the next word.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Session` once the drill has finished, and
    /// `DrillError::Translation` if the next word's lookup fails.
    pub async fn answer(
        &self,
        drill: &mut ActiveDrill,
        input: &str,
    ) -> Result<DrillStep, DrillError> {
        match drill.session.answer(input, self.clock.now())? {
            AnswerOutcome::Correct {
                word,
                speed,
                success_count,
            } => {
                tracing::debug!(%word, %speed, success_count, "correct answer");
                let next = self.present_next(drill).await?;
                Ok(DrillStep::Correct {
                    speed,
                    success_count,
                    next,
                })
            }
            AnswerOutcome::Wrong => {
                tracing::debug!(word = %drill.session.current_word(), "wrong answer");
                Ok(DrillStep::Wrong)
            }
            AnswerOutcome::Finished { practiced } => {
                tracing::info!(practiced, "drill finished");
                Ok(DrillStep::Finished { practiced })
            }
        }
    }

    /// End a drill without the finish command (closed window, end of input).
    pub fn finish(&self, drill: &mut ActiveDrill) -> u32 {
        let practiced = drill.session.finish();
        tracing::info!(practiced, "drill finished");
        practiced
    }

    async fn present_next(&self, drill: &mut ActiveDrill) -> Result<Prompt, DrillError> {
        let next = self.next_prompt().await?;
        drill.session.present(next.word.clone(), self.clock.now())?;
        drill.prompt = next.clone();
        Ok(next)
    }

    async fn next_prompt(&self) -> Result<Prompt, DrillError> {
        let word = self.pick_word()?;
        let translation = self.translations.lookup(&word).await?;
        Ok(Prompt { word, translation })
    }

    fn pick_word(&self) -> Result<Word, DrillError> {
        let mut picker = self.picker.lock().unwrap_or_else(PoisonError::into_inner);
        picker
            .pick(&self.words)
            .cloned()
            .ok_or(DrillError::EmptyWordList)
    }
}
