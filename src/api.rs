use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ExtractError;
use crate::extractor::SubtitleExtractor;
use crate::subtitles::CaptionEntry;

#[derive(Deserialize)]
pub struct SubtitleQuery {
    url: Option<String>,
}

#[derive(Serialize)]
pub struct SubtitlesResponse {
    pub subtitles: String,
    pub raw: Vec<CaptionEntry>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Extract subtitles for a video URL
///
/// # Example
/// ```shell
/// curl 'http://localhost:8080/api/subtitles?url=https://example.com/watch?v=abc'
/// ```
///
/// # Returns
/// ```json
/// {
///    "subtitles": "hello\nworld",
///    "raw": [{"text": "hello"}, {"text": "world"}]
/// }
/// ```
#[get("/api/subtitles")]
pub async fn get_subtitles(
    extractor: web::Data<SubtitleExtractor>,
    query: web::Query<SubtitleQuery>,
) -> impl Responder {
    let url = query.url.as_deref().unwrap_or_default();
    match extractor.extract(url).await {
        Ok(subs) => HttpResponse::Ok().json(SubtitlesResponse {
            subtitles: subs.formatted,
            raw: subs.entries,
        }),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ExtractError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
        details: match &err {
            ExtractError::ExtractionFailed { stderr } => Some(stderr.clone()),
            _ => None,
        },
    };
    match err {
        ExtractError::MissingUrl => HttpResponse::BadRequest().json(body),
        ExtractError::NoSubtitles => HttpResponse::NotFound().json(body),
        ExtractError::Timeout => HttpResponse::GatewayTimeout().json(body),
        ExtractError::ExtractionFailed { .. }
        | ExtractError::MalformedArtifact(_)
        | ExtractError::Io(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Run the API server
pub async fn run_api_server(config: Config) -> std::io::Result<()> {
    let bind = (config.host.clone(), config.port);
    let extractor = web::Data::new(SubtitleExtractor::new(config));
    HttpServer::new(move || {
        App::new()
            .app_data(extractor.clone())
            .service(get_subtitles)
    })
    .bind(bind)?
    .run()
    .await
}
