use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use dipper_core::paraphrase::engine::GenerationEngine;
use dipper_core::paraphrase::error::EngineError;
use dipper_core::paraphrase::sampling::SamplingOptions;

/// Wire request for the engine's `/generate` endpoint.
#[derive(Serialize)]
struct GenerateRequest<'a> {
	inputs: &'a str,
	parameters: &'a SamplingOptions,
}

/// One decoded candidate in the engine's reply.
#[derive(Deserialize)]
struct GenerateReply {
	generated_text: String,
}

/// Generation engine backed by a remote text-generation HTTP service.
///
/// Speaks the Hugging Face text-generation wire shape: POST
/// `{base_url}/generate` with `{"inputs": ..., "parameters": {...}}`,
/// reply `[{"generated_text": ...}]`. Sampling options are serialized
/// into `parameters` untouched.
///
/// # Notes
/// - The client carries a per-request timeout; a timed-out window
///   surfaces as a generation failure for that window.
pub struct HttpEngine {
	client: Client,
	base_url: String,
}

impl HttpEngine {
	/// Creates an engine client for the service at `base_url`.
	///
	/// # Errors
	/// Returns an error if the HTTP client cannot be built.
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EngineError> {
		let client = Client::builder().timeout(timeout).build()?;
		Ok(Self {
			client,
			base_url: base_url.trim_end_matches('/').to_owned(),
		})
	}
}

impl GenerationEngine for HttpEngine {
	fn generate(
		&mut self,
		prompt: &str,
		options: &SamplingOptions,
	) -> Result<Vec<String>, EngineError> {
		let replies: Vec<GenerateReply> = self
			.client
			.post(format!("{}/generate", self.base_url))
			.json(&GenerateRequest {
				inputs: prompt,
				parameters: options,
			})
			.send()?
			.error_for_status()?
			.json()?;

		Ok(replies.into_iter().map(|reply| reply.generated_text).collect())
	}
}
