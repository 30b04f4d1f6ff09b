use drill_core::model::{FrontEnd, practice_summary};
use services::{ActiveDrill, DrillError, DrillService, DrillStep};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Idle,
    Correct,
    Wrong,
    Finished,
}

impl FeedbackTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackTone::Idle => "drill-feedback",
            FeedbackTone::Correct => "drill-feedback drill-feedback--correct",
            FeedbackTone::Wrong => "drill-feedback drill-feedback--wrong",
            FeedbackTone::Finished => "drill-feedback drill-feedback--finished",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: String,
    pub tone: FeedbackTone,
}

impl FeedbackVm {
    #[must_use]
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            tone: FeedbackTone::Idle,
        }
    }

    #[must_use]
    pub fn from_step(step: &DrillStep) -> Self {
        match step {
            DrillStep::Correct { speed, .. } => Self {
                text: format!("correct! {speed}"),
                tone: FeedbackTone::Correct,
            },
            DrillStep::Wrong => Self {
                text: "wrong!".into(),
                tone: FeedbackTone::Wrong,
            },
            DrillStep::Finished { practiced } => Self {
                text: practice_summary(*practiced),
                tone: FeedbackTone::Finished,
            },
        }
    }
}

/// Window-side state of one drill.
#[derive(Clone, Debug)]
pub struct DrillVm {
    drill: ActiveDrill,
    feedback: FeedbackVm,
}

impl DrillVm {
    #[must_use]
    pub fn new(drill: ActiveDrill) -> Self {
        Self {
            drill,
            feedback: FeedbackVm::idle(),
        }
    }

    /// `word  -  translation` for the question label.
    #[must_use]
    pub fn question(&self) -> String {
        self.drill.prompt().to_string()
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackVm {
        &self.feedback
    }

    #[must_use]
    pub fn success_count(&self) -> u32 {
        self.drill.success_count()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.drill.is_finished()
    }

    /// Whether submitting `line` scores the current word and so triggers a
    /// lookup for the next one.
    #[must_use]
    pub fn fetches_next_word(&self, line: &str) -> bool {
        let session = self.drill.session();
        !session.is_finished()
            && session
                .current_word()
                .matches(session.front_end().normalize_input(line))
    }

    /// Submit the entry field's text.
    ///
    /// Returns `Some(practiced)` when this submission finished the drill.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Translation` when the next word cannot be looked up.
    pub async fn submit(
        &mut self,
        service: &DrillService,
        line: &str,
    ) -> Result<Option<u32>, ViewError> {
        let step = service
            .answer(&mut self.drill, line)
            .await
            .map_err(map_drill_error)?;
        self.feedback = FeedbackVm::from_step(&step);
        match step {
            DrillStep::Finished { practiced } => Ok(Some(practiced)),
            DrillStep::Correct { .. } | DrillStep::Wrong => Ok(None),
        }
    }
}

fn map_drill_error(err: DrillError) -> ViewError {
    tracing::error!(error = %err, "drill failed");
    match err {
        DrillError::Translation(_) => ViewError::Translation,
        _ => ViewError::Unknown,
    }
}

/// # Errors
///
/// Returns `ViewError::Translation` when the first lookup fails.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_drill(service: &DrillService) -> Result<DrillVm, ViewError> {
    let drill = service
        .start(FrontEnd::Window)
        .await
        .map_err(map_drill_error)?;
    Ok(DrillVm::new(drill))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use drill_core::model::{Word, WordList};
    use drill_core::time::fixed_clock;
    use services::{Translation, TranslationError, TranslationSource};

    use super::*;

    struct EchoDictionary;

    #[async_trait]
    impl TranslationSource for EchoDictionary {
        async fn lookup(&self, word: &Word) -> Result<Translation, TranslationError> {
            Ok(Translation::Found(word.as_str().to_uppercase()))
        }
    }

    fn service(words: &[&str]) -> DrillService {
        let words = WordList::from_lines(words.iter().copied()).unwrap();
        DrillService::new(fixed_clock(), Arc::new(words), Arc::new(EchoDictionary))
    }

    #[tokio::test]
    async fn question_shows_word_and_translation() {
        let svc = service(&["cat"]);
        let vm = start_drill(&svc).await.unwrap();
        assert_eq!(vm.question(), "cat  -  CAT");
        assert_eq!(vm.feedback(), &FeedbackVm::idle());
    }

    #[tokio::test]
    async fn entry_text_is_trimmed_before_comparison() {
        let svc = service(&["cat"]);
        let mut vm = start_drill(&svc).await.unwrap();
        let finished = vm.submit(&svc, "  cat  ").await.unwrap();
        assert_eq!(finished, None);
        assert_eq!(vm.feedback().tone, FeedbackTone::Correct);
        assert!(vm.feedback().text.starts_with("correct! "));
        assert!(vm.feedback().text.ends_with(" char/s"));
        assert_eq!(vm.success_count(), 1);
    }

    #[tokio::test]
    async fn wrong_answer_turns_feedback_red() {
        let svc = service(&["cat"]);
        let mut vm = start_drill(&svc).await.unwrap();
        vm.submit(&svc, "dog").await.unwrap();
        assert_eq!(
            vm.feedback(),
            &FeedbackVm {
                text: "wrong!".into(),
                tone: FeedbackTone::Wrong
            }
        );
        assert_eq!(vm.question(), "cat  -  CAT");
    }

    #[tokio::test]
    async fn only_the_current_word_triggers_a_lookup() {
        let svc = service(&["cat"]);
        let vm = start_drill(&svc).await.unwrap();
        assert!(vm.fetches_next_word("cat"));
        assert!(vm.fetches_next_word("  cat\n"));
        assert!(!vm.fetches_next_word("cta"));
        assert!(!vm.fetches_next_word("finish practice"));
    }

    #[tokio::test]
    async fn finish_command_reports_count() {
        let svc = service(&["cat"]);
        let mut vm = start_drill(&svc).await.unwrap();
        vm.submit(&svc, "cat").await.unwrap();
        vm.submit(&svc, "cat").await.unwrap();
        let finished = vm.submit(&svc, "finish practice").await.unwrap();
        assert_eq!(finished, Some(2));
        assert!(vm.is_finished());
        assert_eq!(vm.feedback().text, "Practiced 2 words!");
        assert_eq!(
            vm.feedback().tone.css_class(),
            "drill-feedback drill-feedback--finished"
        );
    }
}
