// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_hosted_photo_url as hosted_photo_url, mock_png_file as png_file,
        mock_reference_date as reference_date, mock_user_record as user_record,
    };
}
