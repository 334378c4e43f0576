use crate::endpoint::RelationshipPriority;

use super::Endpoint;

/// A canned response payload for offline and deterministic execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixture {
    ActivityStreamsFriendStream,
    ActivityStreamsNotifications,
    AmazonCredentials,
    Announcements,
    ArtistInvites,
    Auth,
    Availability,
    Categories,
    Category,
    CreateComment,
    CreatePost,
    Editorials,
    Empty,
    FindFriends,
    LovesCreatingALove,
    Nonce,
    PostsListingUsersWhoHaveLovedAPost,
    PostsListingUsersWhoHaveRepostedAPost,
    PostsLoadingMorePostComments,
    PostsPostDetails,
    PostsSearchingForPosts,
    Profile,
    ProfileAvailableUserProfileToggles,
    ProfileListingBlockedUsers,
    ProfileListingMutedUsers,
    ProfileUpdatingUserProfileAndSettings,
    RelationshipBatches,
    RelationshipFollowing,
    RelationshipInactive,
    Usernames,
    UsersGettingAListForAutocompletedLocations,
    UsersGettingAListForAutocompletedUsernames,
    UsersPosts,
    UsersRegisteringAnAccount,
    UsersUserDetails,
    WatchesCreatingAWatch,
}

impl Fixture {
    /// Stable file stem under `fixtures/`.
    pub fn name(self) -> &'static str {
        match self {
            Fixture::ActivityStreamsFriendStream => "activity_streams_friend_stream",
            Fixture::ActivityStreamsNotifications => "activity_streams_notifications",
            Fixture::AmazonCredentials => "amazon-credentials",
            Fixture::Announcements => "announcements",
            Fixture::ArtistInvites => "artist_invites",
            Fixture::Auth => "auth",
            Fixture::Availability => "availability",
            Fixture::Categories => "categories",
            Fixture::Category => "category",
            Fixture::CreateComment => "create-comment",
            Fixture::CreatePost => "create-post",
            Fixture::Editorials => "editorials",
            Fixture::Empty => "empty",
            Fixture::FindFriends => "find-friends",
            Fixture::LovesCreatingALove => "loves_creating_a_love",
            Fixture::Nonce => "nonce",
            Fixture::PostsListingUsersWhoHaveLovedAPost => "posts_listing_users_who_have_loved_a_post",
            Fixture::PostsListingUsersWhoHaveRepostedAPost => {
                "posts_listing_users_who_have_reposted_a_post"
            }
            Fixture::PostsLoadingMorePostComments => "posts_loading_more_post_comments",
            Fixture::PostsPostDetails => "posts_post_details",
            Fixture::PostsSearchingForPosts => "posts_searching_for_posts",
            Fixture::Profile => "profile",
            Fixture::ProfileAvailableUserProfileToggles => "profile_available_user_profile_toggles",
            Fixture::ProfileListingBlockedUsers => "profile_listing_blocked_users",
            Fixture::ProfileListingMutedUsers => "profile_listing_muted_users",
            Fixture::ProfileUpdatingUserProfileAndSettings => {
                "profile_updating_user_profile_and_settings"
            }
            Fixture::RelationshipBatches => "relationship_batches",
            Fixture::RelationshipFollowing => "relationship_following",
            Fixture::RelationshipInactive => "relationship_inactive",
            Fixture::Usernames => "usernames",
            Fixture::UsersGettingAListForAutocompletedLocations => {
                "users_getting_a_list_for_autocompleted_locations"
            }
            Fixture::UsersGettingAListForAutocompletedUsernames => {
                "users_getting_a_list_for_autocompleted_usernames"
            }
            Fixture::UsersPosts => "users_posts",
            Fixture::UsersRegisteringAnAccount => "users_registering_an_account",
            Fixture::UsersUserDetails => "users_user_details",
            Fixture::WatchesCreatingAWatch => "watches_creating_a_watch",
        }
    }

    /// The JSON payload, compiled into the binary.
    pub fn body(self) -> &'static str {
        match self {
            Fixture::ActivityStreamsFriendStream => {
                include_str!("../../fixtures/activity_streams_friend_stream.json")
            }
            Fixture::ActivityStreamsNotifications => {
                include_str!("../../fixtures/activity_streams_notifications.json")
            }
            Fixture::AmazonCredentials => include_str!("../../fixtures/amazon-credentials.json"),
            Fixture::Announcements => include_str!("../../fixtures/announcements.json"),
            Fixture::ArtistInvites => include_str!("../../fixtures/artist_invites.json"),
            Fixture::Auth => include_str!("../../fixtures/auth.json"),
            Fixture::Availability => include_str!("../../fixtures/availability.json"),
            Fixture::Categories => include_str!("../../fixtures/categories.json"),
            Fixture::Category => include_str!("../../fixtures/category.json"),
            Fixture::CreateComment => include_str!("../../fixtures/create-comment.json"),
            Fixture::CreatePost => include_str!("../../fixtures/create-post.json"),
            Fixture::Editorials => include_str!("../../fixtures/editorials.json"),
            Fixture::Empty => include_str!("../../fixtures/empty.json"),
            Fixture::FindFriends => include_str!("../../fixtures/find-friends.json"),
            Fixture::LovesCreatingALove => include_str!("../../fixtures/loves_creating_a_love.json"),
            Fixture::Nonce => include_str!("../../fixtures/nonce.json"),
            Fixture::PostsListingUsersWhoHaveLovedAPost => {
                include_str!("../../fixtures/posts_listing_users_who_have_loved_a_post.json")
            }
            Fixture::PostsListingUsersWhoHaveRepostedAPost => {
                include_str!("../../fixtures/posts_listing_users_who_have_reposted_a_post.json")
            }
            Fixture::PostsLoadingMorePostComments => {
                include_str!("../../fixtures/posts_loading_more_post_comments.json")
            }
            Fixture::PostsPostDetails => include_str!("../../fixtures/posts_post_details.json"),
            Fixture::PostsSearchingForPosts => {
                include_str!("../../fixtures/posts_searching_for_posts.json")
            }
            Fixture::Profile => include_str!("../../fixtures/profile.json"),
            Fixture::ProfileAvailableUserProfileToggles => {
                include_str!("../../fixtures/profile_available_user_profile_toggles.json")
            }
            Fixture::ProfileListingBlockedUsers => {
                include_str!("../../fixtures/profile_listing_blocked_users.json")
            }
            Fixture::ProfileListingMutedUsers => {
                include_str!("../../fixtures/profile_listing_muted_users.json")
            }
            Fixture::ProfileUpdatingUserProfileAndSettings => {
                include_str!("../../fixtures/profile_updating_user_profile_and_settings.json")
            }
            Fixture::RelationshipBatches => include_str!("../../fixtures/relationship_batches.json"),
            Fixture::RelationshipFollowing => {
                include_str!("../../fixtures/relationship_following.json")
            }
            Fixture::RelationshipInactive => include_str!("../../fixtures/relationship_inactive.json"),
            Fixture::Usernames => include_str!("../../fixtures/usernames.json"),
            Fixture::UsersGettingAListForAutocompletedLocations => {
                include_str!("../../fixtures/users_getting_a_list_for_autocompleted_locations.json")
            }
            Fixture::UsersGettingAListForAutocompletedUsernames => {
                include_str!("../../fixtures/users_getting_a_list_for_autocompleted_usernames.json")
            }
            Fixture::UsersPosts => include_str!("../../fixtures/users_posts.json"),
            Fixture::UsersRegisteringAnAccount => {
                include_str!("../../fixtures/users_registering_an_account.json")
            }
            Fixture::UsersUserDetails => include_str!("../../fixtures/users_user_details.json"),
            Fixture::WatchesCreatingAWatch => {
                include_str!("../../fixtures/watches_creating_a_watch.json")
            }
        }
    }
}

impl Endpoint {
    /// Which canned payload answers this call in offline mode.
    pub fn fixture(&self) -> Fixture {
        match self {
            Endpoint::Announcements => Fixture::Announcements,
            Endpoint::AmazonCredentials | Endpoint::AmazonLoggingCredentials => {
                Fixture::AmazonCredentials
            }
            Endpoint::AnonymousCredentials | Endpoint::Auth { .. } | Endpoint::ReAuth { .. } => {
                Fixture::Auth
            }
            Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions => Fixture::ArtistInvites,
            Endpoint::Availability { .. } => Fixture::Availability,
            Endpoint::CreateComment { .. }
            | Endpoint::CommentDetail { .. }
            | Endpoint::UpdateComment { .. } => Fixture::CreateComment,
            Endpoint::CreateLove { .. } => Fixture::LovesCreatingALove,
            Endpoint::CreatePost { .. } | Endpoint::RePost { .. } => Fixture::CreatePost,
            Endpoint::CreateWatchPost { .. } => Fixture::WatchesCreatingAWatch,
            Endpoint::Categories => Fixture::Categories,
            Endpoint::Category { .. } => Fixture::Category,
            Endpoint::CategoryPostActions
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::MarkAnnouncementAsRead
            | Endpoint::CreateCategoryUser { .. }
            | Endpoint::DeleteCategoryUser { .. }
            | Endpoint::DeleteComment { .. }
            | Endpoint::DeleteLove { .. }
            | Endpoint::DeletePost { .. }
            | Endpoint::DeleteSubscriptions { .. }
            | Endpoint::DeleteWatchPost { .. }
            | Endpoint::EditCategoryUser { .. }
            | Endpoint::FollowingNewContent { .. }
            | Endpoint::Hire { .. }
            | Endpoint::Collaborate { .. }
            | Endpoint::Invitations { .. }
            | Endpoint::InviteFriends { .. }
            | Endpoint::NotificationsNewContent { .. }
            | Endpoint::ProfileDelete
            | Endpoint::PostViews { .. }
            | Endpoint::PromotionalViews { .. }
            | Endpoint::PushSubscriptions { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::UserCategories { .. }
            | Endpoint::ResetPassword { .. }
            | Endpoint::RequestPasswordReset { .. } => Fixture::Empty,
            Endpoint::CategoryPosts { .. } | Endpoint::UserStreamPosts { .. } => Fixture::UsersPosts,
            Endpoint::Editorials => Fixture::Editorials,
            Endpoint::EmojiAutoComplete { .. } | Endpoint::UserNameAutoComplete { .. } => {
                Fixture::UsersGettingAListForAutocompletedUsernames
            }
            Endpoint::FindFriends { .. } => Fixture::FindFriends,
            Endpoint::Following => Fixture::ActivityStreamsFriendStream,
            Endpoint::Custom(custom) => custom.mimics().fixture(),
            Endpoint::CustomRequest(custom) => custom.mimics().fixture(),
            Endpoint::InfiniteScroll(scroll) => scroll.api().fixture(),
            Endpoint::Join { .. } => Fixture::UsersRegisteringAnAccount,
            Endpoint::JoinNonce => Fixture::Nonce,
            Endpoint::LocationAutoComplete { .. } => {
                Fixture::UsersGettingAListForAutocompletedLocations
            }
            Endpoint::NotificationsStream { .. } => Fixture::ActivityStreamsNotifications,
            Endpoint::PostComments { .. } => Fixture::PostsLoadingMorePostComments,
            Endpoint::PostDetail { .. } | Endpoint::UpdatePost { .. } => Fixture::PostsPostDetails,
            Endpoint::SearchForUsers { .. }
            | Endpoint::UserStream { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. } => Fixture::UsersUserDetails,
            Endpoint::PostLovers { .. } => Fixture::PostsListingUsersWhoHaveLovedAPost,
            Endpoint::PostReposters { .. } => Fixture::PostsListingUsersWhoHaveRepostedAPost,
            Endpoint::PostReplyAll { .. } => Fixture::Usernames,
            Endpoint::PostRelatedPosts { .. } | Endpoint::SearchForPosts { .. } => {
                Fixture::PostsSearchingForPosts
            }
            Endpoint::CurrentUserBlockedList => Fixture::ProfileListingBlockedUsers,
            Endpoint::CurrentUserMutedList => Fixture::ProfileListingMutedUsers,
            Endpoint::CurrentUserProfile => Fixture::Profile,
            Endpoint::ProfileToggles => Fixture::ProfileAvailableUserProfileToggles,
            Endpoint::ProfileUpdate { .. } => Fixture::ProfileUpdatingUserProfileAndSettings,
            Endpoint::Relationship { relationship, .. } => match relationship {
                RelationshipPriority::Following => Fixture::RelationshipFollowing,
                RelationshipPriority::Starred
                | RelationshipPriority::Block
                | RelationshipPriority::Mute
                | RelationshipPriority::Inactive
                | RelationshipPriority::None
                | RelationshipPriority::Me => Fixture::RelationshipInactive,
            },
            Endpoint::RelationshipBatch { .. } => Fixture::RelationshipBatches,
        }
    }

    pub fn sample_data(&self) -> &'static str {
        self.fixture().body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_fixture_depends_on_priority() {
        let following = Endpoint::Relationship {
            user_id: "1".to_string(),
            relationship: RelationshipPriority::Following,
        };
        let muted = Endpoint::Relationship {
            user_id: "1".to_string(),
            relationship: RelationshipPriority::Mute,
        };
        assert_eq!(following.fixture(), Fixture::RelationshipFollowing);
        assert_eq!(muted.fixture(), Fixture::RelationshipInactive);
    }

    #[test]
    fn fixtures_are_valid_json() {
        let endpoints = [
            Endpoint::Categories,
            Endpoint::Following,
            Endpoint::ProfileToggles,
            Endpoint::ProfileDelete,
            Endpoint::JoinNonce,
        ];
        for endpoint in endpoints {
            let body = endpoint.sample_data();
            assert!(
                serde_json::from_str::<serde_json::Value>(body).is_ok(),
                "{} is not JSON",
                endpoint.fixture().name()
            );
        }
    }
}
