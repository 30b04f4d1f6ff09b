/// How the word timer behaves after a wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerReset {
    /// Restart the timer at the moment of the wrong answer.
    OnWrongAnswer,
    /// Keep timing from when the word was first presented.
    KeepOriginal,
}

/// The front end driving a session.
///
/// The window and the terminal treat input and the word timer differently.
/// Both behaviours are kept as-is rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Window,
    Terminal,
}

impl FrontEnd {
    #[must_use]
    pub fn timer_reset(self) -> TimerReset {
        match self {
            FrontEnd::Window => TimerReset::OnWrongAnswer,
            FrontEnd::Terminal => TimerReset::KeepOriginal,
        }
    }

    /// The terminal treats `finish practice` as a command even when it is
    /// also the current word; the window scores it as an answer first.
    #[must_use]
    pub fn finish_takes_precedence(self) -> bool {
        matches!(self, FrontEnd::Terminal)
    }

    /// The window trims the entry field; the terminal only drops the line terminator.
    #[must_use]
    pub fn normalize_input(self, raw: &str) -> &str {
        match self {
            FrontEnd::Window => raw.trim(),
            FrontEnd::Terminal => raw.trim_end_matches(['\r', '\n']),
        }
    }
}
