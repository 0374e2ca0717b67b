// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use selected_file::SelectedFile;
pub use uploaded_file::UploadedFile;

mod selected_file;
mod uploaded_file;
