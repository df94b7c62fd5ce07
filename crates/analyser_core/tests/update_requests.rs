use std::sync::Once;

use analyser_core::{update, AnalysisResult, AppState, DisplayState, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn loading_state(url: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged(url.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    state
}

#[test]
fn success_stores_analysis_and_clears_loading() {
    init_logging();
    let state = loading_state("https://example.com");

    let (mut next, effects) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: AnalysisResult::Success("# Hi".to_string()),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    assert_eq!(view.analysis, "# Hi");
    assert_eq!(view.error, "");
    assert!(view.show_result());
    assert_eq!(view.display, DisplayState::Result);
    assert!(next.consume_dirty());
}

#[test]
fn failure_stores_message_and_shows_no_result() {
    init_logging();
    let state = loading_state("https://example.com");

    let (next, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: AnalysisResult::Failed("bad site".to_string()),
        },
    );
    let view = next.view();

    assert!(!view.loading);
    assert_eq!(view.error, "bad site");
    assert!(!view.show_result());
    assert_eq!(view.display, DisplayState::Error);
    assert_eq!(next.in_flight(), None);
}

#[test]
fn submit_is_ignored_while_loading() {
    init_logging();
    let state = loading_state("https://example.com");

    let (state, _) = update(state, Msg::InputChanged("https://other.example.com".into()));
    let (next, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next.in_flight(), Some(1));
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let state = loading_state("https://example.com");

    let (next, effects) = update(
        state.clone(),
        Msg::AnalysisCompleted {
            request_id: 42,
            result: AnalysisResult::Success("late".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn resubmit_after_completion_uses_new_request_id() {
    init_logging();
    let state = loading_state("https://example.com");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: AnalysisResult::Failed("bad site".to_string()),
        },
    );

    let (next, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::RequestAnalysis {
            request_id: 2,
            url: "https://example.com".to_string(),
        }]
    );
    let view = next.view();
    assert_eq!(view.error, "");
    assert_eq!(view.analysis, "");
    assert!(view.loading);
}

#[test]
fn new_submission_discards_previous_result() {
    init_logging();
    let state = loading_state("https://example.com");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: AnalysisResult::Success("# Old".to_string()),
        },
    );

    let (next, _) = update(state, Msg::SubmitClicked);

    assert!(!next.view().show_result());
    assert_eq!(next.view().display, DisplayState::Loading);
}
