// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::Path;

use mime::Mime;

pub trait PathExt {
    fn media_type(&self) -> Mime;
}

impl PathExt for Path {
    fn media_type(&self) -> Mime {
        // Camera exports and some browsers save JPEGs as .jfif, which is not
        // mapped to image/jpeg consistently.
        if self
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jfif"))
        {
            return mime::IMAGE_JPEG;
        }

        mime_guess::from_path(self).first_or(mime::APPLICATION_OCTET_STREAM)
    }
}
