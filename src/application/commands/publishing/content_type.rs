/// Cache policy attached to uploaded files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Documents whose content changes under a stable URL.
    Revalidate,
    /// Fingerprinted or rarely changing static assets.
    Immutable,
    Short,
}

impl CachePolicy {
    pub fn header_value(self) -> &'static str {
        match self {
            Self::Revalidate => "public, max-age=0, must-revalidate",
            Self::Immutable => "public, max-age=31536000, immutable",
            Self::Short => "public, max-age=3600",
        }
    }
}

fn extension(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn content_type_for(path: &str) -> &'static str {
    match extension(path).as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "webmanifest" => "application/manifest+json",
        "xml" => "application/xml",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// `path` is relative to the export root, `/`-separated.
pub fn cache_policy_for(path: &str) -> CachePolicy {
    if path.trim_start_matches('/').starts_with("_next/static/") {
        return CachePolicy::Immutable;
    }

    match extension(path).as_str() {
        "html" | "htm" | "json" | "xml" | "txt" | "webmanifest" => CachePolicy::Revalidate,
        "css" | "js" | "mjs" | "map" | "svg" | "png" | "jpg" | "jpeg" | "gif" | "webp"
        | "avif" | "ico" | "woff" | "woff2" | "ttf" | "otf" | "mp4" | "webm" => {
            CachePolicy::Immutable
        }
        _ => CachePolicy::Short,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_revalidated_on_every_request() {
        assert_eq!(cache_policy_for("news/x/index.html"), CachePolicy::Revalidate);
        assert_eq!(
            CachePolicy::Revalidate.header_value(),
            "public, max-age=0, must-revalidate"
        );
        assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
    }

    #[test]
    fn images_are_immutable() {
        assert_eq!(cache_policy_for("images/cover.JPG"), CachePolicy::Immutable);
        assert_eq!(cache_policy_for("logo.svg"), CachePolicy::Immutable);
        assert!(CachePolicy::Immutable.header_value().contains("immutable"));
        assert_eq!(content_type_for("images/cover.JPG"), "image/jpeg");
    }

    #[test]
    fn framework_static_chunks_are_immutable_regardless_of_extension() {
        assert_eq!(cache_policy_for("_next/static/chunks/app.json"), CachePolicy::Immutable);
    }

    #[test]
    fn unknown_extensions_fall_back() {
        assert_eq!(cache_policy_for("robots"), CachePolicy::Short);
        assert_eq!(content_type_for("archive.tar.zst"), "application/octet-stream");
        assert_eq!(content_type_for(".hidden/file"), "application/octet-stream");
    }
}
