//! # Images
//!
//! Politician photos with a placeholder fallback.
//!
//! ## State
//! - `Primary(src)`: showing the resolved photo
//! - `Fallback`: showing [`PLACEHOLDER_IMAGE`], terminal
//!
//! A load failure moves `Primary` to `Fallback` once. A failure while already on
//! the placeholder changes nothing.
//!
//! ## Browser
//! The rendered `<img>` carries an `onerror` handler that first clears itself and
//! then swaps in the placeholder, so the browser can take the same single edge and
//! never loop if the placeholder is broken too. An image that already starts on the
//! placeholder gets no handler at all.
//!
//! ## Hosts
//! Absolute photo URLs must be `https` and on the allow-list, otherwise the
//! placeholder is used from the start. Site-relative paths pass through only when
//! the browser would resolve them to this site; `/\host` or `/<tab>/host` would not.
use url::Url;

use crate::layout::escape;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const SAME_ORIGIN_HOST: &str = "self.invalid";

pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200"><rect width="200" height="200" fill="#e5e7eb"/><circle cx="100" cy="78" r="36" fill="#9ca3af"/><path d="M36 176c8-34 34-52 64-52s56 18 64 52z" fill="#9ca3af"/></svg>"##;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Primary(String),
    Fallback,
}

impl ImageSource {
    pub fn new(src: &str) -> Self {
        if src == PLACEHOLDER_IMAGE {
            return ImageSource::Fallback;
        }

        ImageSource::Primary(src.to_string())
    }

    /// Returns whether this failure changed the displayed reference.
    pub fn on_error(&mut self) -> bool {
        match self {
            ImageSource::Primary(_) => {
                *self = ImageSource::Fallback;
                true
            }
            ImageSource::Fallback => false,
        }
    }

    pub fn current(&self) -> &str {
        match self {
            ImageSource::Primary(src) => src,
            ImageSource::Fallback => PLACEHOLDER_IMAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    /// Fixed 80px round thumbnail.
    Card,
    /// Fills the positioned parent.
    Fill,
}

impl ImageVariant {
    fn attributes(&self) -> &'static str {
        match self {
            ImageVariant::Card => r#"width="80" height="80" class="photo photo-card""#,
            ImageVariant::Fill => r#"class="photo photo-fill""#,
        }
    }
}

pub struct ImageHosts {
    hosts: Vec<String>,
}

impl ImageHosts {
    pub fn new(hosts: &[String]) -> Self {
        Self {
            hosts: hosts.iter().map(|host| host.to_lowercase()).collect(),
        }
    }

    pub fn resolve(&self, photo_url: Option<&str>) -> ImageSource {
        let Some(src) = photo_url.map(str::trim).filter(|s| !s.is_empty()) else {
            return ImageSource::Fallback;
        };

        if src.contains('\\') {
            return ImageSource::Fallback;
        }

        if src.starts_with('/') {
            if same_origin(src) {
                return ImageSource::new(src);
            }

            return ImageSource::Fallback;
        }

        match Url::parse(src) {
            Ok(url) if url.scheme() == "https" && self.allows(url.host_str()) => {
                ImageSource::new(src)
            }
            _ => ImageSource::Fallback,
        }
    }

    fn allows(&self, host: Option<&str>) -> bool {
        host.is_some_and(|host| self.hosts.iter().any(|allowed| allowed == host))
    }
}

/// Resolves `path` the way a browser would against a page on this site.
fn same_origin(path: &str) -> bool {
    Url::parse(&format!("https://{SAME_ORIGIN_HOST}/"))
        .and_then(|base| base.join(path))
        .is_ok_and(|url| url.host_str() == Some(SAME_ORIGIN_HOST))
}

pub fn render_image(source: &ImageSource, alt: &str, variant: ImageVariant) -> String {
    let onerror = match source {
        ImageSource::Primary(_) => {
            format!(r#" onerror="this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'""#)
        }
        ImageSource::Fallback => String::new(),
    };

    format!(
        r#"<img src="{src}" alt="{alt}" {attributes} loading="lazy"{onerror}>"#,
        src = escape(source.current()),
        alt = escape(alt),
        attributes = variant.attributes(),
    )
}
