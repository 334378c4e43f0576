use crate::http::{HttpMethod, ParameterEncoding};

use super::Endpoint;

impl Endpoint {
    /// GET unless the operation creates, mutates, deletes, or polls.
    /// HEAD is reserved for the "new content since" polls.
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::Availability { .. }
            | Endpoint::CreateCategoryUser { .. }
            | Endpoint::CreateComment { .. }
            | Endpoint::CreateLove { .. }
            | Endpoint::CreatePost { .. }
            | Endpoint::EditCategoryUser { .. }
            | Endpoint::FindFriends { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::Hire { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::Join { .. }
            | Endpoint::PushSubscriptions { .. }
            | Endpoint::ReAuth { .. }
            | Endpoint::Relationship { .. }
            | Endpoint::RelationshipBatch { .. }
            | Endpoint::RePost { .. }
            | Endpoint::RequestPasswordReset { .. }
            | Endpoint::CreateWatchPost { .. } => HttpMethod::Post,
            Endpoint::ResetPassword { .. } | Endpoint::UserCategories { .. } => HttpMethod::Put,
            Endpoint::DeleteCategoryUser { .. }
            | Endpoint::DeleteComment { .. }
            | Endpoint::DeleteLove { .. }
            | Endpoint::DeletePost { .. }
            | Endpoint::DeleteSubscriptions { .. }
            | Endpoint::DeleteWatchPost { .. }
            | Endpoint::ProfileDelete => HttpMethod::Delete,
            Endpoint::FollowingNewContent { .. }
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::NotificationsNewContent { .. } => HttpMethod::Head,
            Endpoint::MarkAnnouncementAsRead
            | Endpoint::ProfileUpdate { .. }
            | Endpoint::UpdateComment { .. }
            | Endpoint::UpdatePost { .. } => HttpMethod::Patch,
            // A raw URL is always fetched.
            Endpoint::Custom(_) => HttpMethod::Get,
            Endpoint::CustomRequest(custom) => custom.request().method(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().method(),
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::Categories
            | Endpoint::Category { .. }
            | Endpoint::CategoryPosts { .. }
            | Endpoint::CategoryPostActions
            | Endpoint::CommentDetail { .. }
            | Endpoint::Editorials
            | Endpoint::EmojiAutoComplete { .. }
            | Endpoint::Following
            | Endpoint::JoinNonce
            | Endpoint::LocationAutoComplete { .. }
            | Endpoint::NotificationsStream { .. }
            | Endpoint::PostComments { .. }
            | Endpoint::PostDetail { .. }
            | Endpoint::PostViews { .. }
            | Endpoint::PromotionalViews { .. }
            | Endpoint::PostLovers { .. }
            | Endpoint::PostReplyAll { .. }
            | Endpoint::PostRelatedPosts { .. }
            | Endpoint::PostReposters { .. }
            | Endpoint::CurrentUserBlockedList
            | Endpoint::CurrentUserMutedList
            | Endpoint::CurrentUserProfile
            | Endpoint::ProfileToggles
            | Endpoint::SearchForUsers { .. }
            | Endpoint::SearchForPosts { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. }
            | Endpoint::UserStreamPosts { .. }
            | Endpoint::UserNameAutoComplete { .. } => HttpMethod::Get,
        }
    }

    /// Derived from the method, never chosen per call.
    pub fn parameter_encoding(&self) -> ParameterEncoding {
        self.method().encoding()
    }
}
