use std::cell::RefCell;
use std::rc::Rc;

use dipper_core::paraphrase::controller::Paraphraser;
use dipper_core::paraphrase::engine::GenerationEngine;
use dipper_core::paraphrase::error::{EngineError, ParaphraseError};
use dipper_core::paraphrase::sampling::ParaphraseRequest;

/// Shared handle onto the prompts an engine double has seen.
#[derive(Clone, Default)]
struct PromptLog(Rc<RefCell<Vec<String>>>);

impl PromptLog {
    fn len(&self) -> usize {
        self.0.borrow().len()
    }

    fn prompt(&self, index: usize) -> String {
        self.0.borrow()[index].clone()
    }
}

/// Engine double replaying canned outputs, with optional failure modes.
struct ScriptedEngine {
    replies: Vec<String>,
    log: PromptLog,
    fail_at: Option<usize>,
    empty_at: Option<usize>,
}

impl ScriptedEngine {
    fn new(replies: &[&str], log: PromptLog) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            log,
            fail_at: None,
            empty_at: None,
        }
    }
}

impl GenerationEngine for ScriptedEngine {
    fn generate(
        &mut self,
        prompt: &str,
        _options: &dipper_core::paraphrase::sampling::SamplingOptions,
    ) -> Result<Vec<String>, EngineError> {
        let call = self.log.len();
        self.log.0.borrow_mut().push(prompt.to_string());

        if self.fail_at == Some(call) {
            return Err("engine out of memory".into());
        }
        if self.empty_at == Some(call) {
            return Ok(Vec::new());
        }
        Ok(vec![self.replies[call].clone()])
    }
}

fn request(lex: u8, order: u8, prefix: &str, window_size: usize) -> ParaphraseRequest {
    ParaphraseRequest {
        lex_diversity: lex,
        order_diversity: order,
        style_prefix: prefix.to_string(),
        window_size,
        ..ParaphraseRequest::default()
    }
}

#[test]
fn worked_example_prompts_and_output() {
    let log = PromptLog::default();
    let engine = ScriptedEngine::new(&["first out", "second out"], log.clone());
    let mut paraphraser = Paraphraser::new(engine);

    let output = paraphraser
        .paraphrase("A. B. C. D.", &request(80, 60, "Intro", 3))
        .unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(
        log.prompt(0),
        "lexical = 20, order = 40 Intro <sent> A. B. C. </sent>"
    );
    assert_eq!(
        log.prompt(1),
        "lexical = 20, order = 40 Intro first out <sent> D. </sent>"
    );
    assert_eq!(output, " first out second out");
}

#[test]
fn invalid_diversity_makes_no_engine_calls() {
    for (lex, order) in [(50, 60), (80, 99), (21, 0)] {
        let log = PromptLog::default();
        let engine = ScriptedEngine::new(&[], log.clone());
        let mut paraphraser = Paraphraser::new(engine);

        let result = paraphraser.paraphrase("One. Two.", &request(lex, order, "", 3));

        assert!(matches!(
            result,
            Err(ParaphraseError::InvalidDiversity { .. })
        ));
        assert_eq!(log.len(), 0);
    }
}

#[test]
fn zero_window_size_is_rejected() {
    let log = PromptLog::default();
    let engine = ScriptedEngine::new(&[], log.clone());
    let mut paraphraser = Paraphraser::new(engine);

    let result = paraphraser.paraphrase("One. Two.", &request(80, 60, "", 0));

    assert!(matches!(result, Err(ParaphraseError::InvalidWindowSize)));
    assert_eq!(log.len(), 0);
}

#[test]
fn engine_calls_match_window_count() {
    // 7 sentences in windows of 3: ceil(7 / 3) = 3 calls, last window of 1
    let log = PromptLog::default();
    let engine = ScriptedEngine::new(&["r1", "r2", "r3"], log.clone());
    let mut paraphraser = Paraphraser::new(engine);

    let output = paraphraser
        .paraphrase(
            "S1. S2. S3. S4. S5. S6. S7.",
            &request(80, 60, "Style", 3),
        )
        .unwrap();

    assert_eq!(log.len(), 3);
    assert!(log.prompt(0).contains("<sent> S1. S2. S3. </sent>"));
    assert!(log.prompt(1).contains("<sent> S4. S5. S6. </sent>"));
    assert!(log.prompt(2).contains("<sent> S7. </sent>"));
    assert_eq!(output, " r1 r2 r3");
}

#[test]
fn prefix_accumulates_in_window_order() {
    let log = PromptLog::default();
    let engine = ScriptedEngine::new(&["out1", "out2", "out3"], log.clone());
    let mut paraphraser = Paraphraser::new(engine);

    paraphraser
        .paraphrase("A. B. C.", &request(80, 60, "Seed", 1))
        .unwrap();

    assert_eq!(log.prompt(0), "lexical = 20, order = 40 Seed <sent> A. </sent>");
    assert_eq!(
        log.prompt(1),
        "lexical = 20, order = 40 Seed out1 <sent> B. </sent>"
    );
    assert_eq!(
        log.prompt(2),
        "lexical = 20, order = 40 Seed out1 out2 <sent> C. </sent>"
    );
}

#[test]
fn empty_style_prefix_is_omitted_from_the_prompt() {
    let log = PromptLog::default();
    let engine = ScriptedEngine::new(&["out"], log.clone());
    let mut paraphraser = Paraphraser::new(engine);

    paraphraser.paraphrase("Solo.", &request(0, 100, "  ", 3)).unwrap();

    assert_eq!(log.prompt(0), "lexical = 100, order = 0 <sent> Solo. </sent>");
}

#[test]
fn messy_whitespace_normalizes_to_the_same_prompts() {
    let clean_log = PromptLog::default();
    let mut clean = Paraphraser::new(ScriptedEngine::new(&["x", "y"], clean_log.clone()));
    clean
        .paraphrase("Alpha one. Beta two.", &request(40, 20, "Pre fix", 1))
        .unwrap();

    let messy_log = PromptLog::default();
    let mut messy = Paraphraser::new(ScriptedEngine::new(&["x", "y"], messy_log.clone()));
    messy
        .paraphrase(
            "  Alpha\n one.\t Beta   two. ",
            &request(40, 20, " Pre\nfix ", 1),
        )
        .unwrap();

    assert_eq!(clean_log.prompt(0), messy_log.prompt(0));
    assert_eq!(clean_log.prompt(1), messy_log.prompt(1));
}

#[test]
fn empty_input_yields_empty_output_without_engine_calls() {
    for input in ["", "   ", " \n\t "] {
        let log = PromptLog::default();
        let engine = ScriptedEngine::new(&[], log.clone());
        let mut paraphraser = Paraphraser::new(engine);

        let output = paraphraser
            .paraphrase(input, &ParaphraseRequest::default())
            .unwrap();

        assert_eq!(output, "");
        assert_eq!(log.len(), 0);
    }
}

#[test]
fn engine_failure_aborts_remaining_windows() {
    let log = PromptLog::default();
    let mut engine = ScriptedEngine::new(&["ok"], log.clone());
    engine.fail_at = Some(1);
    let mut paraphraser = Paraphraser::new(engine);

    let result = paraphraser.paraphrase("A. B. C. D. E. F.", &request(80, 60, "", 2));

    match result {
        Err(ParaphraseError::Generation { window, .. }) => assert_eq!(window, 1),
        other => panic!("expected a generation failure, got {other:?}"),
    }
    // The failed call was made, the third window was never attempted
    assert_eq!(log.len(), 2);
}

#[test]
fn empty_candidate_list_is_a_generation_failure() {
    let log = PromptLog::default();
    let mut engine = ScriptedEngine::new(&[], log.clone());
    engine.empty_at = Some(0);
    let mut paraphraser = Paraphraser::new(engine);

    let result = paraphraser.paraphrase("Only one.", &request(80, 60, "", 3));

    assert!(matches!(
        result,
        Err(ParaphraseError::Generation { window: 0, .. })
    ));
}

#[test]
fn prefix_cap_bounds_prompt_growth_but_not_output() {
    let replies = ["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc", "dddddddddd"];

    let capped_log = PromptLog::default();
    let mut capped = Paraphraser::new(ScriptedEngine::new(&replies, capped_log.clone()));
    let mut capped_request = request(80, 60, "Seed", 1);
    capped_request.max_prefix_chars = Some(15);

    let capped_output = capped
        .paraphrase("A. B. C. D.", &capped_request)
        .unwrap();

    let free_log = PromptLog::default();
    let mut free = Paraphraser::new(ScriptedEngine::new(&replies, free_log.clone()));
    let free_output = free
        .paraphrase("A. B. C. D.", &request(80, 60, "Seed", 1))
        .unwrap();

    // Output assembly is independent of the prefix policy
    assert_eq!(capped_output, free_output);
    assert_eq!(capped_output, " aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd");

    // Capped prompts stop growing; unbounded ones keep growing
    let header_and_window = "lexical = 20, order = 40  <sent> X. </sent>".len();
    for call in 0..4 {
        assert!(capped_log.prompt(call).len() <= header_and_window + 15 + 1);
    }
    assert!(free_log.prompt(3).len() > capped_log.prompt(3).len());
}
