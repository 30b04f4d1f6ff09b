mod front_end;
mod session;
mod speed;
mod word;

pub use front_end::{FrontEnd, TimerReset};
pub use session::{
    AnswerOutcome, FINISH_COMMAND, Session, SessionError, SessionPhase, practice_summary,
};
pub use speed::TypingSpeed;
pub use word::{Word, WordError, WordList, WordListError};
