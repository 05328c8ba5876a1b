use crate::config::Config;
use crate::errors::{ThumbError, ThumbResult};
use crate::metadata::MetadataSource;
use crate::report::Report;
use crate::video_id::extract_video_id;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub report: String,
    /// Non-blank lines in the input
    pub total: usize,
    pub processed: usize,
    pub invalid_urls: usize,
    pub failed_lookups: usize,
}

/// Non-blank, trimmed lines of the batch file.
fn read_urls(input: &Path) -> ThumbResult<Vec<String>> {
    let content = match std::fs::read_to_string(input) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ThumbError::BatchFileNotFound {
                path: input.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ThumbError::BatchRead {
                path: input.to_path_buf(),
                source,
            })
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn write_report(output: &Path, report: &str) -> ThumbResult<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output, report)
    };

    write().map_err(|source| ThumbError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}

/// Resolve every URL in `input` and render the report.
///
/// Bad lines and failed lookups are logged and skipped; only file-level
/// problems and an empty result are errors. The report goes to `output`
/// when given, otherwise to stdout.
pub fn process_batch(
    input: &Path,
    output: Option<&Path>,
    source: &dyn MetadataSource,
    config: &Config,
) -> ThumbResult<BatchSummary> {
    let urls = read_urls(input)?;
    if urls.is_empty() {
        return Err(ThumbError::NoUrlsInBatch {
            path: input.to_path_buf(),
        });
    }

    let mut report = Report::new(config.description_max_chars);
    let mut invalid_urls = 0;
    let mut failed_lookups = 0;

    for url in &urls {
        let Some(video_id) = extract_video_id(url) else {
            log::warn!("Skipping invalid URL: {url}");
            invalid_urls += 1;
            continue;
        };

        match source.video_metadata(&video_id) {
            Ok(meta) => report.push(&meta),
            Err(err) => {
                log::warn!("Error processing {url}: {err}");
                failed_lookups += 1;
            }
        }
    }

    let total = urls.len();
    if report.is_empty() {
        return Err(if invalid_urls == total {
            ThumbError::NoValidUrls { total }
        } else {
            ThumbError::NoMetadataFetched { total }
        });
    }

    let rendered = report.render();
    match output {
        Some(output) => {
            write_report(output, &rendered)?;
            log::info!("Report written to {}", output.display());
        }
        None => print!("{rendered}"),
    }

    let skipped = invalid_urls + failed_lookups;
    if skipped > 0 {
        log::warn!("Skipped {skipped} URLs ({invalid_urls} invalid, {failed_lookups} failed)");
    }
    log::info!("Processed {} of {total} URLs", report.len());

    Ok(BatchSummary {
        report: rendered,
        total,
        processed: report.len(),
        invalid_urls,
        failed_lookups,
    })
}
