// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use super::InlineImage;

/// What the `profile_photo` field currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoSource {
    Empty,
    /// A photo that has already been uploaded.
    Hosted(Url),
    /// A freshly selected local image, not uploaded yet.
    Inline(InlineImage),
    Invalid,
}

impl PhotoSource {
    pub fn classify(value: &str) -> Self {
        if value.is_empty() {
            return PhotoSource::Empty;
        }

        if let Ok(image) = value.parse::<InlineImage>() {
            return PhotoSource::Inline(image);
        }

        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => PhotoSource::Hosted(url),
            _ => PhotoSource::Invalid,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, PhotoSource::Inline(_))
    }
}
