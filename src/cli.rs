use crate::thumbnail::Quality;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Extract and download YouTube video thumbnails.
#[derive(Parser, Debug)]
#[command(
    name = "yt-thumb",
    version,
    about,
    long_about = None,
    after_help = "Examples:
  yt-thumb https://www.youtube.com/watch?v=dQw4w9WgXcQ
  yt-thumb https://youtu.be/dQw4w9WgXcQ --download
  yt-thumb https://youtu.be/dQw4w9WgXcQ --download --output my_thumb.jpg
  yt-thumb --batch urls.txt --output results.md

Skipped URLs and the batch summary are logged to stderr at warn/info level.
RUST_LOG replaces the -v filter, so RUST_LOG=error hides them.",
    group(ArgGroup::new("input").required(true).args(["url", "batch"]))
)]
pub struct Args {
    /// YouTube video URL
    pub url: Option<String>,

    /// File with one URL per line; prints a markdown table
    #[clap(short, long, conflicts_with_all = ["download", "meta"])]
    pub batch: Option<PathBuf>,

    /// Download the thumbnail instead of printing the URL
    #[clap(short, long, default_value = "false")]
    pub download: bool,

    /// Print title and description as JSON
    #[clap(short, long, default_value = "false", conflicts_with = "download")]
    pub meta: bool,

    /// Thumbnail tier to print: maxresdefault, sddefault, hqdefault, mqdefault, default
    #[clap(
        short,
        long,
        default_value = "maxresdefault",
        conflicts_with_all = ["download", "meta", "batch"]
    )]
    pub quality: Quality,

    /// Output file (default for downloads: {video_id}.jpg)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// YAML config file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub enum Mode {
    PrintUrl { url: String, quality: Quality },
    Download { url: String, output: Option<PathBuf> },
    Meta { url: String },
    Batch { input: PathBuf, output: Option<PathBuf> },
}

impl Args {
    pub fn mode(&self) -> Mode {
        if let Some(input) = &self.batch {
            return Mode::Batch {
                input: input.clone(),
                output: self.output.clone(),
            };
        }

        // clap guarantees a url when there is no batch file
        let url = self.url.clone().unwrap_or_default();
        if self.download {
            Mode::Download {
                url,
                output: self.output.clone(),
            }
        } else if self.meta {
            Mode::Meta { url }
        } else {
            Mode::PrintUrl {
                url,
                quality: self.quality,
            }
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "yt_thumb=info",
            1 => "yt_thumb=debug",
            _ => "yt_thumb=trace,reqwest=debug",
        }
    }
}
