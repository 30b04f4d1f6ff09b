use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{FrontEnd, TimerReset, TypingSpeed, Word};

/// Typed at any prompt to end the practice.
pub const FINISH_COMMAND: &str = "finish practice";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already finished")]
    Finished,

    #[error("no word is awaiting an answer")]
    NotAwaiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A word is shown and its timer is running.
    Awaiting,
    /// The word was answered correctly; the next word has not been presented yet.
    Resolved,
    Finished,
}

/// What a single submitted line did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    Correct {
        word: Word,
        speed: TypingSpeed,
        success_count: u32,
    },
    Wrong,
    Finished {
        practiced: u32,
    },
}

/// Per-run drill state: the word in play, the score and the word timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    front_end: FrontEnd,
    current_word: Word,
    success_count: u32,
    word_started_at: DateTime<Utc>,
    phase: SessionPhase,
}

impl Session {
    /// Start a session with `word` presented at `now`.
    #[must_use]
    pub fn start(front_end: FrontEnd, word: Word, now: DateTime<Utc>) -> Self {
        Self {
            front_end,
            current_word: word,
            success_count: 0,
            word_started_at: now,
            phase: SessionPhase::Awaiting,
        }
    }

    #[must_use]
    pub fn front_end(&self) -> FrontEnd {
        self.front_end
    }

    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.current_word
    }

    #[must_use]
    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    #[must_use]
    pub fn word_started_at(&self) -> DateTime<Utc> {
        self.word_started_at
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Compare one line of input against the current word.
    ///
    /// A correct answer moves the session to `Resolved`; call [`Session::present`]
    /// with the next word to continue. A wrong answer keeps the current word and,
    /// for the window front end, restarts its timer at `now`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the finish command was accepted.
    /// Returns `SessionError::NotAwaiting` if the next word was not presented yet.
    pub fn answer(
        &mut self,
        raw_input: &str,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        match self.phase {
            SessionPhase::Awaiting => {}
            SessionPhase::Resolved => return Err(SessionError::NotAwaiting),
            SessionPhase::Finished => return Err(SessionError::Finished),
        }

        let input = self.front_end.normalize_input(raw_input);
        let is_finish = input == FINISH_COMMAND;
        if is_finish && self.front_end.finish_takes_precedence() {
            return Ok(AnswerOutcome::Finished {
                practiced: self.finish(),
            });
        }

        if self.current_word.matches(input) {
            self.success_count = self.success_count.saturating_add(1);
            let speed =
                TypingSpeed::from_elapsed(self.current_word.char_count(), now - self.word_started_at);
            self.phase = SessionPhase::Resolved;
            return Ok(AnswerOutcome::Correct {
                word: self.current_word.clone(),
                speed,
                success_count: self.success_count,
            });
        }

        if is_finish {
            return Ok(AnswerOutcome::Finished {
                practiced: self.finish(),
            });
        }

        if self.front_end.timer_reset() == TimerReset::OnWrongAnswer {
            self.word_started_at = now;
        }
        Ok(AnswerOutcome::Wrong)
    }

    /// Present the next word and restart its timer at `now`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if the session has ended.
    pub fn present(&mut self, word: Word, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        self.current_word = word;
        self.word_started_at = now;
        self.phase = SessionPhase::Awaiting;
        Ok(())
    }

    /// End the session and return the number of words practiced.
    pub fn finish(&mut self) -> u32 {
        self.phase = SessionPhase::Finished;
        self.success_count
    }
}

/// `Practiced 1 word!` / `Practiced 3 words!`. Zero reads as singular.
#[must_use]
pub fn practice_summary(practiced: u32) -> String {
    let plural = if practiced > 1 { "s" } else { "" };
    format!("Practiced {practiced} word{plural}!")
}
