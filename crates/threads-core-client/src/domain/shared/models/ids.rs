// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use threads_utils::id_string;

id_string!(
    /// The server-side identifier of a user account.
    UserId
);

id_string!(
    /// The server-side identifier of a community.
    CommunityId
);

id_string!(ThreadId);
