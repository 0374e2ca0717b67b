// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use field_errors::FieldErrors;
pub use inline_image::{is_inline_image, InlineImage, InlineImageError};
pub use photo_source::PhotoSource;
pub use profile_draft::ProfileDraft;
pub use profile_field::ProfileField;
pub use update_user_request::UpdateUserRequest;
pub use user_record::UserRecord;

mod field_errors;
mod inline_image;
mod photo_source;
mod profile_draft;
mod profile_field;
mod update_user_request;
mod user_record;
