// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use mime::Mime;

/// A file the user picked locally, held in memory until it is encoded or
/// uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub media_type: Mime,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, media_type: Mime, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            data: data.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.type_() == mime::IMAGE
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SelectedFile {
    /// Reads the file at `path`, guessing its media type from the extension.
    pub async fn open(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use crate::util::PathExt;

        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            media_type: path.media_type(),
            data,
        })
    }
}
