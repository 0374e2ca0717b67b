// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use base64::{engine::general_purpose, DecodeError, Engine as _};
use mime::Mime;
use thiserror::Error;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// An image held inline as a `data:` URL until it is handed to the upload
/// service.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub media_type: Mime,
    pub data: Vec<u8>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InlineImageError {
    #[error("Value is not an inline-encoded image.")]
    NotInlineImage,

    #[error("Media type {0} is not an image.")]
    NotAnImage(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl InlineImage {
    pub fn new(media_type: Mime, data: impl Into<Vec<u8>>) -> Result<Self, InlineImageError> {
        if media_type.type_() != mime::IMAGE {
            return Err(InlineImageError::NotAnImage(media_type.to_string()));
        }

        Ok(Self {
            media_type,
            data: data.into(),
        })
    }

    pub fn base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }
}

/// Sniffs whether `value` is an inline-encoded image by looking at its
/// `data:image/...;base64,` prefix only. The payload is not decoded.
pub fn is_inline_image(value: &str) -> bool {
    split_data_url(value).is_some()
}

fn split_data_url(value: &str) -> Option<(Mime, &str)> {
    let rest = value.strip_prefix(DATA_URL_SCHEME)?;
    let (media_type, payload) = rest.split_once(BASE64_MARKER)?;
    let media_type = media_type.parse::<Mime>().ok()?;

    if media_type.type_() != mime::IMAGE {
        return None;
    }

    Some((media_type, payload))
}

impl Display for InlineImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            DATA_URL_SCHEME,
            self.media_type.essence_str(),
            BASE64_MARKER,
            self.base64()
        )
    }
}

impl FromStr for InlineImage {
    type Err = InlineImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (media_type, payload) = split_data_url(s).ok_or(InlineImageError::NotInlineImage)?;
        let data = general_purpose::STANDARD.decode(payload)?;
        Ok(Self { media_type, data })
    }
}
