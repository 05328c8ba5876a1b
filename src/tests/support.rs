use crate::errors::FetchError;
use crate::metadata::{MetadataSource, VideoMetadata};
use crate::scrape::{HttpResponse, Transport};
use crate::thumbnail::thumbnail_url;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Once;
use std::time::Duration;

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Records `LEVEL message` lines per thread, so parallel tests don't mix.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let line = format!("{} {}", record.level(), record.args());
        CAPTURED.with(|lines| lines.borrow_mut().push(line));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Run `f` and return what it logged on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).expect("another logger is already installed");
        log::set_max_level(log::LevelFilter::Trace);
    });

    CAPTURED.with(|lines| lines.borrow_mut().clear());
    let out = f();
    (out, CAPTURED.with(|lines| lines.take()))
}

pub fn ok(content_length: Option<u64>, body: &[u8]) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse {
        status: 200,
        content_length,
        body: body.to_vec(),
    })
}

pub fn not_found(url: &str) -> Result<HttpResponse, FetchError> {
    Err(FetchError::Status {
        url: url.to_string(),
        status: 404,
    })
}

/// Replays a fixed response per URL and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, Result<HttpResponse, FetchError>>,
    calls: RefCell<Vec<(String, Option<Duration>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, response: Result<HttpResponse, FetchError>) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn calls(&self) -> Vec<(String, Option<Duration>)> {
        self.calls.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push((url.to_string(), timeout));
        self.routes.get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::Request {
                url: url.to_string(),
                message: "network unreachable".to_string(),
            })
        })
    }
}

/// Metadata keyed by video id; unknown ids fail.
#[derive(Default)]
pub struct StubSource {
    records: HashMap<String, (String, String)>,
    fallback: Option<(String, String)>,
    pub lookups: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, video_id: &str, title: &str, description: &str) -> Self {
        self.records
            .insert(video_id.to_string(), (title.to_string(), description.to_string()));
        self
    }

    /// Answer every id with the same record.
    pub fn always(title: &str, description: &str) -> Self {
        Self {
            fallback: Some((title.to_string(), description.to_string())),
            ..Default::default()
        }
    }
}

impl MetadataSource for StubSource {
    fn video_metadata(&self, video_id: &str) -> anyhow::Result<VideoMetadata> {
        self.lookups.borrow_mut().push(video_id.to_string());
        let (title, description) = self
            .records
            .get(video_id)
            .or(self.fallback.as_ref())
            .ok_or_else(|| anyhow::anyhow!("Network error"))?;

        Ok(VideoMetadata {
            title: title.clone(),
            description: description.clone(),
            thumbnail_url: thumbnail_url(video_id),
        })
    }
}
