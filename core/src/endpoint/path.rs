use super::{Endpoint, API_PREFIX};

const OAUTH_TOKEN_PATH: &str = "/api/oauth/token";

impl Endpoint {
    /// Path below the configured base URL.
    ///
    /// Some paths are built from another variant's path (profile settings,
    /// user sub-streams), so this recurses into the catalog.
    pub fn path(&self) -> String {
        match self {
            Endpoint::AmazonCredentials => format!("{API_PREFIX}/assets/credentials"),
            Endpoint::AmazonLoggingCredentials => format!("{API_PREFIX}/assets/logging"),
            Endpoint::Announcements | Endpoint::AnnouncementsNewContent { .. } => {
                format!("{API_PREFIX}/most_recent_announcements")
            }
            Endpoint::ArtistInvites | Endpoint::ArtistInviteSubmissions => {
                format!("{API_PREFIX}/artist_invites")
            }
            Endpoint::ArtistInviteDetail { id } => format!("{API_PREFIX}/artist_invites/{id}"),
            Endpoint::MarkAnnouncementAsRead => {
                format!("{}/mark_last_read_announcement", Endpoint::Announcements.path())
            }
            Endpoint::AnonymousCredentials | Endpoint::Auth { .. } | Endpoint::ReAuth { .. } => {
                OAUTH_TOKEN_PATH.to_string()
            }
            Endpoint::Custom(custom) => custom.url().path().to_string(),
            Endpoint::CustomRequest(custom) => custom.request().url().path().to_string(),
            Endpoint::Editorials => format!("{API_PREFIX}/editorials"),
            Endpoint::ResetPassword { .. } => format!("{API_PREFIX}/reset_password"),
            Endpoint::RequestPasswordReset { .. } => format!("{API_PREFIX}/forgot-password"),
            Endpoint::Availability { .. } => format!("{API_PREFIX}/availability"),
            Endpoint::CommentDetail {
                post_id,
                comment_id,
            }
            | Endpoint::DeleteComment {
                post_id,
                comment_id,
            }
            | Endpoint::UpdateComment {
                post_id,
                comment_id,
                ..
            } => format!("{API_PREFIX}/posts/{post_id}/comments/{comment_id}"),
            Endpoint::Categories => format!("{API_PREFIX}/categories"),
            Endpoint::CategoryPostActions => format!("{API_PREFIX}/category_posts"),
            Endpoint::Category { slug } => format!("{API_PREFIX}/categories/{slug}"),
            Endpoint::CategoryPosts { slug } => {
                format!("{API_PREFIX}/categories/{slug}/posts/recent")
            }
            Endpoint::CreateCategoryUser { .. } => format!("{API_PREFIX}/category_users"),
            Endpoint::CreateComment { parent_post_id, .. } => {
                format!("{API_PREFIX}/posts/{parent_post_id}/comments")
            }
            Endpoint::CreateLove { post_id } => format!("{API_PREFIX}/posts/{post_id}/loves"),
            Endpoint::CreatePost { .. } | Endpoint::RePost { .. } => format!("{API_PREFIX}/posts"),
            Endpoint::CreateWatchPost { post_id } => format!("{API_PREFIX}/posts/{post_id}/watches"),
            Endpoint::DeleteCategoryUser { id } => format!("{API_PREFIX}/category_users/{id}"),
            Endpoint::DeleteLove { post_id } => format!("{API_PREFIX}/posts/{post_id}/love"),
            Endpoint::DeletePost { post_id } | Endpoint::UpdatePost { post_id, .. } => {
                format!("{API_PREFIX}/posts/{post_id}")
            }
            Endpoint::DeleteSubscriptions { token } | Endpoint::PushSubscriptions { token } => {
                format!(
                    "{}/push_subscriptions/apns/{}",
                    Endpoint::CurrentUserProfile.path(),
                    hex::encode(token)
                )
            }
            Endpoint::DeleteWatchPost { post_id } => format!("{API_PREFIX}/posts/{post_id}/watch"),
            // The trailing slash is what the server routes on.
            Endpoint::EditCategoryUser { .. } => format!("{API_PREFIX}/category_users/"),
            Endpoint::EmojiAutoComplete { .. } => format!("{API_PREFIX}/emoji/autocomplete"),
            Endpoint::FindFriends { .. } => format!("{API_PREFIX}/profile/find_friends"),
            Endpoint::FlagComment {
                post_id,
                comment_id,
                kind,
            } => format!("{API_PREFIX}/posts/{post_id}/comments/{comment_id}/flag/{kind}"),
            Endpoint::FlagPost { post_id, kind } => {
                format!("{API_PREFIX}/posts/{post_id}/flag/{kind}")
            }
            Endpoint::FlagUser { user_id, kind } => {
                format!("{API_PREFIX}/users/{user_id}/flag/{kind}")
            }
            Endpoint::Following | Endpoint::FollowingNewContent { .. } => {
                format!("{API_PREFIX}/following/posts/recent")
            }
            Endpoint::Hire { user_id, .. } => format!("{API_PREFIX}/users/{user_id}/hire_me"),
            Endpoint::Collaborate { user_id, .. } => {
                format!("{API_PREFIX}/users/{user_id}/collaborate")
            }
            Endpoint::InfiniteScroll(scroll) => scroll
                .api()
                .paging_path()
                .unwrap_or_else(|| scroll.continuation().path().to_string()),
            Endpoint::Invitations { .. } | Endpoint::InviteFriends { .. } => {
                format!("{API_PREFIX}/invitations")
            }
            Endpoint::Join { .. } => format!("{API_PREFIX}/join"),
            Endpoint::JoinNonce => format!("{API_PREFIX}/nonce"),
            Endpoint::LocationAutoComplete { .. } => {
                format!("{API_PREFIX}/profile/location_autocomplete")
            }
            Endpoint::NotificationsNewContent { .. } | Endpoint::NotificationsStream { .. } => {
                format!("{API_PREFIX}/notifications")
            }
            Endpoint::PostComments { post_id } => format!("{API_PREFIX}/posts/{post_id}/comments"),
            Endpoint::PostDetail { post_param } => format!("{API_PREFIX}/posts/{post_param}"),
            Endpoint::PostViews { .. } | Endpoint::PromotionalViews { .. } => {
                format!("{API_PREFIX}/post_views")
            }
            Endpoint::PostLovers { post_id } => format!("{API_PREFIX}/posts/{post_id}/lovers"),
            Endpoint::PostReplyAll { post_id } => {
                format!("{API_PREFIX}/posts/{post_id}/commenters_usernames")
            }
            Endpoint::PostRelatedPosts { post_id } => {
                format!("{API_PREFIX}/posts/{post_id}/related")
            }
            Endpoint::PostReposters { post_id } => {
                format!("{API_PREFIX}/posts/{post_id}/reposters")
            }
            Endpoint::CurrentUserProfile | Endpoint::ProfileUpdate { .. } | Endpoint::ProfileDelete => {
                format!("{API_PREFIX}/profile")
            }
            Endpoint::CurrentUserBlockedList => format!("{API_PREFIX}/profile/blocked"),
            Endpoint::CurrentUserMutedList => format!("{API_PREFIX}/profile/muted"),
            Endpoint::ProfileToggles => format!("{}/settings", Endpoint::CurrentUserProfile.path()),
            Endpoint::Relationship {
                user_id,
                relationship,
            } => format!("{API_PREFIX}/users/{user_id}/add/{relationship}"),
            Endpoint::RelationshipBatch { .. } => format!("{API_PREFIX}/relationships/batches"),
            Endpoint::SearchForPosts { .. } => format!("{API_PREFIX}/posts"),
            Endpoint::SearchForUsers { .. } => format!("{API_PREFIX}/users"),
            Endpoint::UserCategories { .. } => {
                format!("{}/followed_categories", Endpoint::CurrentUserProfile.path())
            }
            Endpoint::UserStream { user_param } => format!("{API_PREFIX}/users/{user_param}"),
            Endpoint::UserStreamFollowers { user_id } => {
                format!("{}/followers", user_stream_path(user_id))
            }
            Endpoint::UserStreamFollowing { user_id } => {
                format!("{}/following", user_stream_path(user_id))
            }
            Endpoint::UserStreamPosts { user_id } => format!("{}/posts", user_stream_path(user_id)),
            Endpoint::UserNameAutoComplete { .. } => format!("{API_PREFIX}/users/autocomplete"),
        }
    }

    /// Path of the next page for listings that page by cursor.
    pub fn paging_path(&self) -> Option<String> {
        match self {
            Endpoint::PostDetail { .. } => Some(format!("{}/comments", self.path())),
            Endpoint::UserStream { .. } => Some(format!("{}/posts", self.path())),
            Endpoint::Category { .. } => Some(format!("{}/posts/recent", self.path())),
            Endpoint::Custom(custom) => custom.mimics().paging_path(),
            Endpoint::CustomRequest(custom) => custom.mimics().paging_path(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().paging_path(),
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

fn user_stream_path(user_id: &str) -> String {
    Endpoint::UserStream {
        user_param: user_id.to_string(),
    }
    .path()
}
