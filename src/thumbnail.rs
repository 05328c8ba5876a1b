use crate::config::Config;
use crate::errors::{ThumbError, ThumbResult};
use crate::scrape::Transport;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi";

/// Image variants the thumbnail host serves for every video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    MaxRes,
    Standard,
    High,
    Medium,
    Default,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::MaxRes => "maxresdefault",
            Quality::Standard => "sddefault",
            Quality::High => "hqdefault",
            Quality::Medium => "mqdefault",
            Quality::Default => "default",
        }
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maxresdefault" | "maxres" => Ok(Quality::MaxRes),
            "sddefault" | "sd" => Ok(Quality::Standard),
            "hqdefault" | "hq" => Ok(Quality::High),
            "mqdefault" | "mq" => Ok(Quality::Medium),
            "default" => Ok(Quality::Default),
            other => Err(format!(
                "unknown quality '{other}', expected one of: maxresdefault, sddefault, hqdefault, mqdefault, default"
            )),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The id is not validated; whatever is passed ends up in the path.
pub fn thumbnail_url_for(video_id: &str, quality: Quality) -> String {
    format!("{THUMBNAIL_BASE_URL}/{video_id}/{quality}.jpg")
}

/// Max-res thumbnail address for `video_id`.
pub fn thumbnail_url(video_id: &str) -> String {
    thumbnail_url_for(video_id, Quality::MaxRes)
}

/// Download the best available thumbnail to `dest`.
///
/// The max-res image is only trusted when its declared length exceeds
/// `config.min_image_bytes`; missing max-res images come back as a small
/// placeholder rather than an error. Anything else falls back to `hqdefault`.
///
/// Returns the tier that was written, or `None` when both requests failed.
/// A write error on the max-res path is returned as `Err`; on the fallback
/// path it counts as a failed download. Parent directories of `dest` must
/// already exist.
pub fn download_thumbnail(
    transport: &dyn Transport,
    config: &Config,
    video_id: &str,
    dest: &Path,
) -> ThumbResult<Option<Quality>> {
    let max_res_url = thumbnail_url_for(video_id, Quality::MaxRes);

    match transport.get(&max_res_url, None) {
        Ok(resp) => match resp.content_length {
            Some(len) if len > config.min_image_bytes => {
                std::fs::write(dest, &resp.body).map_err(|source| ThumbError::OutputWrite {
                    path: dest.to_path_buf(),
                    source,
                })?;
                log::debug!("{video_id}: saved {} to {}", Quality::MaxRes, dest.display());
                return Ok(Some(Quality::MaxRes));
            }
            len => log::debug!("{video_id}: max-res looks like a placeholder ({len:?} bytes)"),
        },
        Err(err) => log::debug!("{err}"),
    }

    let hq_url = thumbnail_url_for(video_id, Quality::High);
    let resp = match transport.get(&hq_url, None) {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("{err}");
            return Ok(None);
        }
    };

    if let Err(err) = std::fs::write(dest, &resp.body) {
        log::warn!("{}: {err}", dest.display());
        return Ok(None);
    }

    log::debug!("{video_id}: saved {} to {}", Quality::High, dest.display());
    Ok(Some(Quality::High))
}
