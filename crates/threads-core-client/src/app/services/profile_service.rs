// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use threads_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynNavigator, DynProfileValidator, DynUploadService, DynUserAccountService,
};
use crate::domain::user_profiles::models::UserRecord;

use super::ProfileForm;

#[derive(InjectDependencies)]
pub struct ProfileService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    navigator: DynNavigator,
    #[inject]
    profile_validator: DynProfileValidator,
    #[inject]
    upload_service: DynUploadService,
    #[inject]
    user_account_service: DynUserAccountService,
}

impl ProfileService {
    /// Creates a form whose draft is initialized from `user`.
    pub fn edit_profile(&self, user: &UserRecord) -> ProfileForm {
        ProfileForm::new(
            self.ctx.clone(),
            self.navigator.clone(),
            self.profile_validator.clone(),
            self.upload_service.clone(),
            self.user_account_service.clone(),
            user,
        )
    }
}
