use std::fmt;

use super::Endpoint;

/// The response shape an endpoint returns, used by the parsing layer to pick
/// a decoder. `NoContent` marks calls whose body is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingType {
    Activities,
    AmazonCredentials,
    Announcements,
    ArtistInvites,
    ArtistInviteSubmissions,
    AutoCompleteResults,
    Availability,
    Categories,
    CategoryPosts,
    CategoryUsers,
    Comments,
    DynamicSettings,
    Editorials,
    Loves,
    Nonces,
    NoContent,
    Posts,
    Relationships,
    Usernames,
    Users,
    Watches,
}

impl MappingType {
    /// Key of the top-level collection in the response payload.
    pub fn as_str(self) -> &'static str {
        match self {
            MappingType::Activities => "activities",
            MappingType::AmazonCredentials => "credentials",
            MappingType::Announcements => "announcements",
            MappingType::ArtistInvites => "artist_invites",
            MappingType::ArtistInviteSubmissions => "artist_invite_submissions",
            MappingType::AutoCompleteResults => "autocomplete_results",
            MappingType::Availability => "availability",
            MappingType::Categories => "categories",
            MappingType::CategoryPosts => "category_posts",
            MappingType::CategoryUsers => "category_users",
            MappingType::Comments => "comments",
            MappingType::DynamicSettings => "settings",
            MappingType::Editorials => "editorials",
            MappingType::Loves => "loves",
            MappingType::Nonces => "nonces",
            MappingType::NoContent => "204",
            MappingType::Posts => "posts",
            MappingType::Relationships => "relationships",
            MappingType::Usernames => "usernames",
            MappingType::Users => "users",
            MappingType::Watches => "watches",
        }
    }
}

impl fmt::Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Endpoint {
    pub fn mapping_type(&self) -> MappingType {
        match self {
            // Credentials go straight to the keychain; there is no model.
            Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::ReAuth { .. }
            | Endpoint::RequestPasswordReset { .. } => MappingType::NoContent,
            Endpoint::EditCategoryUser { .. } | Endpoint::CreateCategoryUser { .. } => {
                MappingType::CategoryUsers
            }
            Endpoint::Announcements => MappingType::Announcements,
            Endpoint::AmazonCredentials | Endpoint::AmazonLoggingCredentials => {
                MappingType::AmazonCredentials
            }
            Endpoint::Availability { .. } => MappingType::Availability,
            Endpoint::Categories | Endpoint::Category { .. } => MappingType::Categories,
            Endpoint::CategoryPostActions => MappingType::CategoryPosts,
            Endpoint::ArtistInvites | Endpoint::ArtistInviteDetail { .. } => MappingType::ArtistInvites,
            Endpoint::ArtistInviteSubmissions => MappingType::ArtistInviteSubmissions,
            Endpoint::Editorials => MappingType::Editorials,
            Endpoint::PostReplyAll { .. } => MappingType::Usernames,
            Endpoint::JoinNonce => MappingType::Nonces,
            Endpoint::CurrentUserBlockedList
            | Endpoint::CurrentUserMutedList
            | Endpoint::CurrentUserProfile
            | Endpoint::FindFriends { .. }
            | Endpoint::Join { .. }
            | Endpoint::PostLovers { .. }
            | Endpoint::PostReposters { .. }
            | Endpoint::ProfileUpdate { .. }
            | Endpoint::ResetPassword { .. }
            | Endpoint::SearchForUsers { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. } => MappingType::Users,
            Endpoint::Custom(custom) => custom.mimics().mapping_type(),
            Endpoint::CustomRequest(custom) => custom.mimics().mapping_type(),
            Endpoint::CommentDetail { .. }
            | Endpoint::CreateComment { .. }
            | Endpoint::PostComments { .. }
            | Endpoint::UpdateComment { .. } => MappingType::Comments,
            Endpoint::CreateLove { .. } => MappingType::Loves,
            Endpoint::CategoryPosts { .. }
            | Endpoint::CreatePost { .. }
            | Endpoint::Following
            | Endpoint::PostDetail { .. }
            | Endpoint::PostRelatedPosts { .. }
            | Endpoint::RePost { .. }
            | Endpoint::SearchForPosts { .. }
            | Endpoint::UpdatePost { .. }
            | Endpoint::UserStreamPosts { .. } => MappingType::Posts,
            Endpoint::CreateWatchPost { .. } | Endpoint::DeleteWatchPost { .. } => MappingType::Watches,
            Endpoint::EmojiAutoComplete { .. }
            | Endpoint::UserNameAutoComplete { .. }
            | Endpoint::LocationAutoComplete { .. } => MappingType::AutoCompleteResults,
            Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::DeleteCategoryUser { .. }
            | Endpoint::DeleteComment { .. }
            | Endpoint::DeleteLove { .. }
            | Endpoint::DeletePost { .. }
            | Endpoint::DeleteSubscriptions { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::FollowingNewContent { .. }
            | Endpoint::Hire { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::MarkAnnouncementAsRead
            | Endpoint::NotificationsNewContent { .. }
            | Endpoint::PostViews { .. }
            | Endpoint::ProfileDelete
            | Endpoint::PromotionalViews { .. }
            | Endpoint::PushSubscriptions { .. }
            | Endpoint::RelationshipBatch { .. }
            | Endpoint::UserCategories { .. } => MappingType::NoContent,
            Endpoint::NotificationsStream { .. } => MappingType::Activities,
            Endpoint::InfiniteScroll(scroll) => {
                let api = scroll.api();
                api.paging_mapping_type().unwrap_or_else(|| api.mapping_type())
            }
            Endpoint::ProfileToggles => MappingType::DynamicSettings,
            Endpoint::Relationship { .. } => MappingType::Relationships,
        }
    }

    /// Shape of the next page for listings that page by cursor.
    pub fn paging_mapping_type(&self) -> Option<MappingType> {
        match self {
            Endpoint::PostDetail { .. } => Some(MappingType::Comments),
            Endpoint::UserStream { .. } | Endpoint::Category { .. } => Some(MappingType::Posts),
            Endpoint::Custom(custom) => custom.mimics().paging_mapping_type(),
            Endpoint::CustomRequest(custom) => custom.mimics().paging_mapping_type(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().paging_mapping_type(),
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::MarkAnnouncementAsRead
            | Endpoint::AnonymousCredentials
            | Endpoint::Auth { .. }
            | Endpoint::Availability { .. }
            | Endpoint::Categories
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
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. }
            | Endpoint::UserStreamPosts { .. }
            | Endpoint::UserNameAutoComplete { .. } => None,
        }
    }
}
