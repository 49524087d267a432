use std::env;
use std::sync::Mutex;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

use dipper_core::paraphrase::controller::Paraphraser;
use dipper_core::paraphrase::error::ParaphraseError;
use dipper_core::paraphrase::sampling::ParaphraseRequest;
use dipper_core::paraphrase::segment::RuleSegmenter;

mod engine;

use engine::HttpEngine;

/// Server configuration, read from the environment with local defaults.
struct ServerConfig {
	bind: String,
	engine_url: String,
	engine_timeout: Duration,
}

impl ServerConfig {
	fn from_env() -> Self {
		let timeout_secs = env::var("DIPPER_ENGINE_TIMEOUT_SECS")
			.ok()
			.and_then(|value| value.parse::<u64>().ok())
			.unwrap_or(120);

		Self {
			bind: env::var("DIPPER_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned()),
			engine_url: env::var("DIPPER_ENGINE_URL")
				.unwrap_or_else(|_| "http://127.0.0.1:8080".to_owned()),
			engine_timeout: Duration::from_secs(timeout_secs),
		}
	}
}

/// JSON body for the `/v1/paraphrase` endpoint: the text plus any
/// `ParaphraseRequest` fields (defaults apply to whatever is omitted).
#[derive(Deserialize)]
struct ParaphraseBody {
	text: String,
	#[serde(flatten)]
	request: ParaphraseRequest,
}

#[derive(Serialize)]
struct ParaphraseReply {
	/// The assembled paraphrase, leading space preserved.
	paraphrase: String,
}

#[derive(Serialize)]
struct HealthReply {
	status: &'static str,
	engine_url: String,
}

struct SharedData {
	paraphraser: Paraphraser<HttpEngine, RuleSegmenter>,
	engine_url: String,
}

/// Outcome of the blocking paraphrase work dispatched off the executor.
enum WorkError {
	Lock,
	Paraphrase(ParaphraseError),
}

fn error_response(error: ParaphraseError) -> HttpResponse {
	match &error {
		ParaphraseError::InvalidDiversity { .. } | ParaphraseError::InvalidWindowSize => {
			HttpResponse::BadRequest().body(error.to_string())
		}
		ParaphraseError::Generation { .. } => HttpResponse::BadGateway().body(error.to_string()),
		ParaphraseError::Segmentation { .. } => {
			HttpResponse::InternalServerError().body(error.to_string())
		}
	}
}

/// HTTP POST endpoint `/v1/paraphrase`
///
/// Runs the paraphrase controller on the posted text. The engine call
/// chain is blocking, so the whole call runs on the blocking pool; the
/// shared paraphraser serializes concurrent requests.
#[post("/v1/paraphrase")]
async fn post_paraphrase(
	data: web::Data<Mutex<SharedData>>,
	body: web::Json<ParaphraseBody>,
) -> impl Responder {
	let body = body.into_inner();

	let outcome = web::block(move || -> Result<String, WorkError> {
		let mut shared = match data.lock() {
			Ok(shared) => shared,
			Err(_) => return Err(WorkError::Lock),
		};
		shared
			.paraphraser
			.paraphrase(&body.text, &body.request)
			.map_err(WorkError::Paraphrase)
	})
	.await;

	match outcome {
		Ok(Ok(paraphrase)) => HttpResponse::Ok().json(ParaphraseReply { paraphrase }),
		Ok(Err(WorkError::Lock)) => {
			HttpResponse::InternalServerError().body("Paraphraser lock failed")
		}
		Ok(Err(WorkError::Paraphrase(error))) => error_response(error),
		Err(_) => HttpResponse::InternalServerError().body("Worker pool failure"),
	}
}

/// HTTP GET endpoint `/v1/health`
#[get("/v1/health")]
async fn get_health(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared = match data.lock() {
		Ok(shared) => shared,
		Err(_) => return HttpResponse::InternalServerError().body("Paraphraser lock failed"),
	};
	HttpResponse::Ok().json(HealthReply {
		status: "ok",
		engine_url: shared.engine_url.clone(),
	})
}

/// Main entry point for the server.
///
/// Builds the HTTP engine client, wraps the paraphraser in a `Mutex` for
/// thread safety, and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env();
	let engine = HttpEngine::new(&config.engine_url, config.engine_timeout)
		.map_err(std::io::Error::other)?;

	let shared_data = SharedData {
		paraphraser: Paraphraser::new(engine),
		engine_url: config.engine_url.clone(),
	};
	let shared = web::Data::new(Mutex::new(shared_data));

	log::info!(
		"listening on {} (engine at {})",
		config.bind,
		config.engine_url
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared.clone())
			.service(post_paraphrase)
			.service(get_health)
	})
	.bind(config.bind.as_str())?
	.run()
	.await
}
