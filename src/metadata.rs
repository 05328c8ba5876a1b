use crate::config::Config;
use crate::scrape::Transport;
use crate::thumbnail::thumbnail_url;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const WATCH_BASE_URL: &str = "https://www.youtube.com/watch?v=";

static OG_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta\s+property="og:title"\s+content="([^"]*)""#)
        .expect("Failed to compile og:title regex")
});

static OG_DESCRIPTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta\s+property="og:description"\s+content="([^"]*)""#)
        .expect("Failed to compile og:description regex")
});

/// What we know about a video. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
}

impl VideoMetadata {
    /// Record with no scraped fields; the thumbnail address never needs the network.
    pub fn empty(video_id: &str) -> Self {
        Self {
            thumbnail_url: thumbnail_url(video_id),
            ..Default::default()
        }
    }
}

/// Anything that can describe a video by id.
pub trait MetadataSource {
    fn video_metadata(&self, video_id: &str) -> anyhow::Result<VideoMetadata>;
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_BASE_URL}{video_id}")
}

fn first_capture(re: &Regex, html: &str) -> String {
    re.captures(html)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
        .unwrap_or_default()
}

/// Pull `og:title` and `og:description` out of a watch page.
///
/// First match wins; entities are left as-is.
pub fn parse_video_page(html: &str, video_id: &str) -> VideoMetadata {
    VideoMetadata {
        title: first_capture(&OG_TITLE_REGEX, html),
        description: first_capture(&OG_DESCRIPTION_REGEX, html),
        thumbnail_url: thumbnail_url(video_id),
    }
}

/// Scrapes the public watch page.
pub struct PageScraper<'a> {
    transport: &'a dyn Transport,
    config: &'a Config,
}

impl<'a> PageScraper<'a> {
    pub fn new(transport: &'a dyn Transport, config: &'a Config) -> Self {
        Self { transport, config }
    }
}

impl MetadataSource for PageScraper<'_> {
    fn video_metadata(&self, video_id: &str) -> anyhow::Result<VideoMetadata> {
        let url = watch_url(video_id);

        let resp = match self.transport.get(&url, Some(self.config.page_timeout())) {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("{err}");
                return Ok(VideoMetadata::empty(video_id));
            }
        };

        log::debug!("{url}: status {} ({} bytes)", resp.status, resp.body.len());
        let meta = parse_video_page(&resp.text(), video_id);
        if meta.title.is_empty() {
            log::debug!("{video_id}: no og:title on watch page");
        }

        Ok(meta)
    }
}
