use chrono::{DateTime, Utc};

use crate::auth::Credentials;
use crate::config::ClientConfig;

use super::Endpoint;

const JSON: &str = "application/json";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

impl Endpoint {
    /// Request headers for this call.
    ///
    /// `Authorization` is attached when the endpoint takes a token and the
    /// snapshot holds one; a missing token is left for the server to reject.
    /// `If-Modified-Since` is attached for the "new content since" polls that
    /// carry a timestamp.
    pub fn headers(&self, config: &ClientConfig, credentials: &Credentials) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), JSON.to_string())];
        if let Some(language) = &config.accept_language {
            headers.push(("Accept-Language".to_string(), language.clone()));
        }
        headers.push(("Content-Type".to_string(), JSON.to_string()));

        if let Some(build) = &config.build_number {
            headers.push(("X-iOS-Build-Number".to_string(), build.clone()));
        }

        if self.requires_any_token() {
            if let Some(token) = &credentials.token {
                headers.push(("Authorization".to_string(), token.bearer()));
            }
        }

        if let Some(since) = self.modified_since() {
            headers.push((
                "If-Modified-Since".to_string(),
                since.format(HTTP_DATE_FORMAT).to_string(),
            ));
        }
        headers
    }

    fn modified_since(&self) -> Option<DateTime<Utc>> {
        match self {
            Endpoint::AnnouncementsNewContent { created_at }
            | Endpoint::FollowingNewContent { created_at }
            | Endpoint::NotificationsNewContent { created_at } => *created_at,
            Endpoint::Custom(custom) => custom.mimics().modified_since(),
            Endpoint::CustomRequest(custom) => custom.mimics().modified_since(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().modified_since(),
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::MarkAnnouncementAsRead
            | Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::Availability { .. }
            | Endpoint::Categories
            | Endpoint::Category { .. }
            | Endpoint::CategoryPosts { .. }
            | Endpoint::CategoryPostActions
            | Endpoint::CommentDetail { .. }
            | Endpoint::CreateCategoryUser { .. }
            | Endpoint::CreateComment { .. }
            | Endpoint::CreateLove { .. }
            | Endpoint::CreatePost { .. }
            | Endpoint::CreateWatchPost { .. }
            | Endpoint::DeleteCategoryUser { .. }
            | Endpoint::DeleteComment { .. }
            | Endpoint::DeleteLove { .. }
            | Endpoint::DeletePost { .. }
            | Endpoint::DeleteSubscriptions { .. }
            | Endpoint::DeleteWatchPost { .. }
            | Endpoint::EditCategoryUser { .. }
            | Endpoint::Editorials
            | Endpoint::EmojiAutoComplete { .. }
            | Endpoint::FindFriends { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::Following
            | Endpoint::Hire { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::Join { .. }
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
            | Endpoint::ProfileDelete
            | Endpoint::ProfileToggles
            | Endpoint::ProfileUpdate { .. }
            | Endpoint::PushSubscriptions { .. }
            | Endpoint::ReAuth { .. }
            | Endpoint::RePost { .. }
            | Endpoint::Relationship { .. }
            | Endpoint::RelationshipBatch { .. }
            | Endpoint::ResetPassword { .. }
            | Endpoint::RequestPasswordReset { .. }
            | Endpoint::SearchForUsers { .. }
            | Endpoint::SearchForPosts { .. }
            | Endpoint::UpdatePost { .. }
            | Endpoint::UpdateComment { .. }
            | Endpoint::UserCategories { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. }
            | Endpoint::UserStreamPosts { .. }
            | Endpoint::UserNameAutoComplete { .. } => None,
        }
    }
}
