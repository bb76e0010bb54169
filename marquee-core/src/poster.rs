use std::borrow::Cow;

use marquee_model::{MovieRecord, POSTER_NOT_AVAILABLE};
use once_cell::sync::Lazy;
use regex::Regex;

/// Size every recognised token is rewritten to.
pub const HI_RES_SIZE: u32 = 1000;

/// Token families used by the poster CDN: scale/upscale bound on width or
/// height (`_SX300_`, `_UY562_`, ...).
const SIZE_FAMILIES: [&str; 4] = ["SX", "SY", "UX", "UY"];

struct SizeRewrite {
    pattern: Regex,
    replacement: String,
}

// Embedded forms (`_SX300_...`) are tried before terminal forms (`_SX300.jpg`).
static SIZE_REWRITES: Lazy<Vec<SizeRewrite>> = Lazy::new(|| {
    let embedded = SIZE_FAMILIES.iter().map(|family| SizeRewrite {
        pattern: Regex::new(&format!(r"(?i)_{family}\d+_"))
            .expect("embedded size regex should compile"),
        replacement: format!("_{family}{HI_RES_SIZE}_"),
    });
    let terminal = SIZE_FAMILIES.iter().map(|family| SizeRewrite {
        pattern: Regex::new(&format!(r"(?i)_{family}\d+(\.[a-z0-9]+)$"))
            .expect("terminal size regex should compile"),
        replacement: format!("_{family}{HI_RES_SIZE}${{1}}"),
    });
    embedded.chain(terminal).collect()
});

/// Upgrade a thumbnail poster URL to its high-resolution variant.
///
/// Empty input and the `"N/A"` sentinel come back untouched, as does any URL
/// without a recognised size token. Only the first matching pattern is
/// rewritten. Applying the function to its own output is a no-op.
pub fn hi_res_poster_url(url: &str) -> Cow<'_, str> {
    if url.is_empty() || url == POSTER_NOT_AVAILABLE {
        return Cow::Borrowed(url);
    }

    SIZE_REWRITES
        .iter()
        .find(|rewrite| rewrite.pattern.is_match(url))
        .map(|rewrite| {
            rewrite
                .pattern
                .replacen(url, 1, rewrite.replacement.as_str())
        })
        .unwrap_or(Cow::Borrowed(url))
}

/// Enhanced poster for a record, `None` when it has no usable poster.
pub fn hi_res_poster(record: &MovieRecord) -> Option<String> {
    record
        .poster_url()
        .map(|url| hi_res_poster_url(url).into_owned())
}
