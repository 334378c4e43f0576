use crate::auth::{AuthRequirement, Credentials};

use super::Endpoint;

impl Endpoint {
    /// False only for the calls that obtain credentials in the first place.
    pub fn requires_any_token(&self) -> bool {
        match self {
            Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::ReAuth { .. }
            | Endpoint::RequestPasswordReset { .. } => false,
            Endpoint::Custom(custom) => custom.mimics().requires_any_token(),
            Endpoint::CustomRequest(custom) => custom.mimics().requires_any_token(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().requires_any_token(),
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::MarkAnnouncementAsRead
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
            | Endpoint::FollowingNewContent { .. }
            | Endpoint::Hire { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::Join { .. }
            | Endpoint::JoinNonce
            | Endpoint::LocationAutoComplete { .. }
            | Endpoint::NotificationsNewContent { .. }
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
            | Endpoint::RePost { .. }
            | Endpoint::Relationship { .. }
            | Endpoint::RelationshipBatch { .. }
            | Endpoint::ResetPassword { .. }
            | Endpoint::SearchForUsers { .. }
            | Endpoint::SearchForPosts { .. }
            | Endpoint::UpdatePost { .. }
            | Endpoint::UpdateComment { .. }
            | Endpoint::UserCategories { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. }
            | Endpoint::UserStreamPosts { .. }
            | Endpoint::UserNameAutoComplete { .. } => true,
        }
    }

    /// Whether a device-level anonymous token is enough. True for public,
    /// read-mostly calls and the few signed-out flows (join, password reset,
    /// unsubscribing a device).
    pub fn supports_anonymous_token(&self) -> bool {
        match self {
            Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::Availability { .. }
            | Endpoint::Categories
            | Endpoint::Category { .. }
            | Endpoint::CategoryPosts { .. }
            | Endpoint::CategoryPostActions
            | Endpoint::DeleteSubscriptions { .. }
            | Endpoint::Editorials
            | Endpoint::Join { .. }
            | Endpoint::JoinNonce
            | Endpoint::PostComments { .. }
            | Endpoint::PostDetail { .. }
            | Endpoint::PostLovers { .. }
            | Endpoint::PostRelatedPosts { .. }
            | Endpoint::PostReposters { .. }
            | Endpoint::PostViews { .. }
            | Endpoint::PromotionalViews { .. }
            | Endpoint::ResetPassword { .. }
            | Endpoint::SearchForPosts { .. }
            | Endpoint::SearchForUsers { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. }
            | Endpoint::UserStreamPosts { .. } => true,
            Endpoint::Custom(custom) => custom.mimics().supports_anonymous_token(),
            Endpoint::CustomRequest(custom) => custom.mimics().supports_anonymous_token(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().supports_anonymous_token(),
            // Credential acquisition never claims anonymous support.
            Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::ReAuth { .. }
            | Endpoint::RequestPasswordReset { .. } => false,
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::MarkAnnouncementAsRead
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
            | Endpoint::DeleteWatchPost { .. }
            | Endpoint::EditCategoryUser { .. }
            | Endpoint::EmojiAutoComplete { .. }
            | Endpoint::FindFriends { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::Following
            | Endpoint::FollowingNewContent { .. }
            | Endpoint::Hire { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::LocationAutoComplete { .. }
            | Endpoint::NotificationsNewContent { .. }
            | Endpoint::NotificationsStream { .. }
            | Endpoint::PostReplyAll { .. }
            | Endpoint::CurrentUserBlockedList
            | Endpoint::CurrentUserMutedList
            | Endpoint::CurrentUserProfile
            | Endpoint::ProfileDelete
            | Endpoint::ProfileToggles
            | Endpoint::ProfileUpdate { .. }
            | Endpoint::PushSubscriptions { .. }
            | Endpoint::RePost { .. }
            | Endpoint::Relationship { .. }
            | Endpoint::RelationshipBatch { .. }
            | Endpoint::UpdatePost { .. }
            | Endpoint::UpdateComment { .. }
            | Endpoint::UserCategories { .. }
            | Endpoint::UserNameAutoComplete { .. } => false,
        }
    }

    pub fn auth_requirement(&self) -> AuthRequirement {
        AuthRequirement::from_flags(self.requires_any_token(), self.supports_anonymous_token())
    }

    /// Whether `credentials` are enough to issue this call. The executor uses
    /// this to decide whether to fetch an anonymous token or ask the user to
    /// sign in first.
    pub fn accepts(&self, credentials: &Credentials) -> bool {
        self.auth_requirement().is_satisfied_by(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthToken;

    #[test]
    fn password_reset_request_needs_no_token() {
        let endpoint = Endpoint::RequestPasswordReset {
            email: "a@b.co".to_string(),
        };
        assert!(!endpoint.requires_any_token());
        assert!(!endpoint.supports_anonymous_token());
        assert_eq!(endpoint.auth_requirement(), AuthRequirement::None);
    }

    #[test]
    fn public_streams_accept_anonymous_tokens() {
        let anon = Credentials::with_token(AuthToken::anonymous("device"));
        let stream = Endpoint::UserStream {
            user_param: "~ello".to_string(),
        };
        assert!(stream.accepts(&anon));
        assert!(!Endpoint::Following.accepts(&anon));
        assert!(Endpoint::Following.accepts(&Credentials::with_token(AuthToken::user("u"))));
    }
}
