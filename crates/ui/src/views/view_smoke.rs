use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use drill_core::model::{Word, WordList};
use drill_core::time::fixed_clock;
use services::{DrillService, Translation, TranslationError, TranslationSource};
use tokio::sync::Notify;

use super::test_harness::setup_drill_harness;

struct StubDictionary;

#[async_trait]
impl TranslationSource for StubDictionary {
    async fn lookup(&self, word: &Word) -> Result<Translation, TranslationError> {
        Ok(match word.as_str() {
            "hello" => Translation::Found("你好".into()),
            _ => Translation::NotFound,
        })
    }
}

struct UnreachableDictionary;

#[async_trait]
impl TranslationSource for UnreachableDictionary {
    async fn lookup(&self, _word: &Word) -> Result<Translation, TranslationError> {
        Err(TranslationError::InvalidMarker {
            class: "dtrans".into(),
            reason: "unreachable".into(),
        })
    }
}

/// Answers the first lookup at once and holds every later one until released.
#[derive(Default)]
struct GatedDictionary {
    lookups: AtomicUsize,
    gate: Notify,
}

#[async_trait]
impl TranslationSource for GatedDictionary {
    async fn lookup(&self, _word: &Word) -> Result<Translation, TranslationError> {
        if self.lookups.fetch_add(1, Ordering::SeqCst) > 0 {
            self.gate.notified().await;
        }
        Ok(Translation::Found("你好".into()))
    }
}

fn service(words: &[&str], dictionary: Arc<dyn TranslationSource>) -> DrillService {
    let words = WordList::from_lines(words.iter().copied()).unwrap();
    DrillService::new(fixed_clock(), Arc::new(words), dictionary)
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_renders_question_and_entry() {
    let mut harness = setup_drill_harness(service(&["hello"], Arc::new(StubDictionary)));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("hello  -  你好"), "missing question in {html}");
    assert!(html.contains("drill-input"), "missing entry field in {html}");
    assert!(harness.app.finished.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_shows_sentinel_for_missing_translation() {
    let mut harness = setup_drill_harness(service(&["zzyzx"], Arc::new(StubDictionary)));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("zzyzx  -  No translation found."),
        "missing sentinel in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_ends_on_failed_lookup() {
    let mut harness = setup_drill_harness(service(&["hello"], Arc::new(UnreachableDictionary)));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not reach the dictionary"),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn finish_command_reports_count_to_the_app() {
    let mut harness = setup_drill_harness(service(&["hello"], Arc::new(StubDictionary)));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.submit("hello");
    harness.drive_async().await;
    harness.drive_async().await;
    assert!(harness.render().contains("correct! "));

    harness.submit("  finish practice ");
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.finished(), vec![1]);
    assert!(html.contains("drill-feedback--finished"), "not yellow in {html}");
    assert!(html.contains("Practiced 1 word!"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn input_is_ignored_while_next_word_loads() {
    let dictionary = Arc::new(GatedDictionary::default());
    let mut harness = setup_drill_harness(service(&["hello"], dictionary.clone()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.submit("hello");
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Loading..."), "expected loading label in {html}");

    harness.submit("finish practice");
    harness.drive_async().await;
    assert!(harness.finished().is_empty());

    dictionary.gate.notify_one();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("hello  -  你好"), "missing next word in {html}");
    assert!(html.contains("correct! "), "missing feedback in {html}");

    harness.submit("finish practice");
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.finished(), vec![1]);
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_keeps_the_question_without_a_lookup() {
    let dictionary = Arc::new(GatedDictionary::default());
    let mut harness = setup_drill_harness(service(&["hello"], dictionary.clone()));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.submit("helo");
    let html = harness.render();
    assert!(!html.contains("Loading..."), "unexpected loading label in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("hello  -  你好"), "missing question in {html}");
    assert!(html.contains("drill-feedback--wrong"), "not red in {html}");
    assert_eq!(dictionary.lookups.load(Ordering::SeqCst), 1);
}
