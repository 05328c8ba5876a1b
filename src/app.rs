use crate::batch;
use crate::cli::Mode;
use crate::config::Config;
use crate::errors::{ThumbError, ThumbResult};
use crate::metadata::{MetadataSource, PageScraper};
use crate::scrape::Transport;
use crate::thumbnail::{download_thumbnail, thumbnail_url_for};
use crate::video_id::extract_video_id;
use std::path::{Path, PathBuf};

pub fn resolve_video_id(url: &str) -> ThumbResult<String> {
    extract_video_id(url).ok_or_else(|| ThumbError::InvalidUrl {
        url: url.to_string(),
    })
}

pub fn default_output(video_id: &str) -> PathBuf {
    PathBuf::from(format!("{video_id}.jpg"))
}

fn ensure_parent_dir(path: &Path) -> ThumbResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| ThumbError::CreateDir {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}

/// Download mode: fetch the thumbnail for `url` into `output` (or `{id}.jpg`).
pub fn download(
    transport: &dyn Transport,
    config: &Config,
    url: &str,
    output: Option<&Path>,
) -> ThumbResult<PathBuf> {
    let video_id = resolve_video_id(url)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(&video_id));

    ensure_parent_dir(&output)?;

    println!("Downloading thumbnail for video ID: {video_id}");
    println!("Saving to: {}", output.display());

    match download_thumbnail(transport, config, &video_id, &output)? {
        Some(quality) => {
            println!(
                "Successfully downloaded thumbnail to {} ({quality})",
                output.display()
            );
            Ok(output)
        }
        None => Err(ThumbError::DownloadFailed { video_id }),
    }
}

pub fn run(mode: Mode, config: &Config, transport: &dyn Transport) -> ThumbResult<()> {
    match mode {
        Mode::PrintUrl { url, quality } => {
            let video_id = resolve_video_id(&url)?;
            println!("{}", thumbnail_url_for(&video_id, quality));
        }

        Mode::Download { url, output } => {
            download(transport, config, &url, output.as_deref())?;
        }

        Mode::Meta { url } => {
            let video_id = resolve_video_id(&url)?;
            let meta = PageScraper::new(transport, config)
                .video_metadata(&video_id)
                .map_err(|err| ThumbError::Metadata {
                    message: err.to_string(),
                })?;
            let json = serde_json::to_string_pretty(&meta)?;
            println!("{json}");
        }

        Mode::Batch { input, output } => {
            let source = PageScraper::new(transport, config);
            let summary = batch::process_batch(&input, output.as_deref(), &source, config)?;
            log::debug!(
                "batch done: {}/{} rows ({} invalid, {} failed), {} bytes of report",
                summary.processed,
                summary.total,
                summary.invalid_urls,
                summary.failed_lookups,
                summary.report.len()
            );
        }
    }

    Ok(())
}
