use once_cell::sync::Lazy;
use regex::Regex;

/// Address shapes we recognise, tried in order. Each must be followed by
/// exactly the 11 identifier characters; anything after them is ignored.
static VIDEO_ID_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // youtube.com/watch?v=ID
        Regex::new(r"youtube\.com/watch\?v=([A-Za-z0-9_-]{11})")
            .expect("Failed to compile watch regex"),
        // youtu.be/ID
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").expect("Failed to compile short regex"),
        // youtube.com/embed/ID
        Regex::new(r"youtube\.com/embed/([A-Za-z0-9_-]{11})")
            .expect("Failed to compile embed regex"),
    ]
});

/// Extract the video id from a watch, youtu.be or embed URL.
///
/// This is a substring search, not URL parsing, so protocol, `www.`,
/// trailing parameters and fragments don't matter. `/shorts/` links are not
/// recognised.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
    })
}
