// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bottombar_service::BottombarService;
pub use database_connector::DatabaseConnector;
pub use profile_form::{ProfileForm, SubmitError};
pub use profile_service::ProfileService;
pub use threads_service::ThreadsService;

mod bottombar_service;
mod database_connector;
mod profile_form;
mod profile_service;
mod threads_service;
