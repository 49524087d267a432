use dipper_core::paraphrase::controller::Paraphraser;
use dipper_core::paraphrase::engine::GenerationEngine;
use dipper_core::paraphrase::error::EngineError;
use dipper_core::paraphrase::sampling::{ParaphraseRequest, SamplingOptions};

/// In-process engine replaying canned rewrites, so the walkthrough runs
/// without a model behind it. Each call prints the prompt it received,
/// which makes the prefix threading visible.
struct ScriptedEngine {
    replies: Vec<&'static str>,
    calls: usize,
}

impl GenerationEngine for ScriptedEngine {
    fn generate(
        &mut self,
        prompt: &str,
        _options: &SamplingOptions,
    ) -> Result<Vec<String>, EngineError> {
        println!("engine call {}:\n  {prompt}", self.calls + 1);
        let reply = self
            .replies
            .get(self.calls)
            .copied()
            .ok_or("script exhausted")?;
        self.calls += 1;
        Ok(vec![reply.to_owned()])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A scripted engine standing in for the real model
    let engine = ScriptedEngine {
        replies: vec![
            "The meeting opened at nine, and coffee was already gone.",
            "Nobody minded, since the agenda was short.",
        ],
        calls: 0,
    };
    let mut paraphraser = Paraphraser::new(engine);

    // Defaults mirror the original front-end:
    // lexical diversity 80, order diversity 60, prefix "Paraphrasing",
    // windows of 3 sentences, sampled decoding (top_p 0.75, top_k 50)
    let mut request = ParaphraseRequest::default();

    // Dials only accept multiples of 20 from 0 to 100;
    // 0 asks for no deviation, 100 for maximum deviation
    request.lex_diversity = 60;
    request.order_diversity = 20;

    // The style prefix seeds the conditioning context; every window's
    // output is appended to it, so later windows see earlier rewrites
    request.style_prefix = "In a plain register".to_owned();

    // Six sentences in windows of 3 means exactly two engine calls
    let text = "The meeting started at 9am sharp. The coffee was gone by then. \
                People kept arriving anyway. Nobody complained about it. \
                The agenda only had two items. Both were done by ten.";

    let output = paraphraser.paraphrase(text, &request)?;

    // The output keeps its leading space (accumulation artifact); trim
    // when displaying
    println!("paraphrase: {}", output.trim_start());

    // Off-dial values are rejected before any engine work
    request.lex_diversity = 50;
    match paraphraser.paraphrase(text, &request) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected as expected: {e}"),
    }

    Ok(())
}
