//! The closed catalog of every operation the client can perform.
//!
//! # Design
//! Each `Endpoint` variant carries only the caller-supplied input of its
//! operation. Everything else about the request (path, method, parameters,
//! headers, auth policy, response mapping, paging, canned sample) is derived
//! on demand by the functions in the submodules, one property per module.
//! Every derivation matches exhaustively with no wildcard arm, so a new
//! variant does not compile until each property handles it.
//!
//! Three variants are decorators. `Custom` replays a raw URL, `CustomRequest`
//! replays a full `RequestDescriptor`, and `InfiniteScroll` fetches the next
//! page of a listing. Each wraps another endpoint and delegates every
//! property to it except the ones it exists to override. Decorator payloads
//! can only be built through the checked constructors below, which cap the
//! wrapping depth at `MAX_DECORATOR_DEPTH`.

mod auth;
mod headers;
mod mapping;
mod method;
mod parameters;
mod path;
mod sample;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::EndpointError;
use crate::paging::Continuation;
use crate::request::RequestDescriptor;

pub use mapping::MappingType;
pub use sample::Fixture;

/// Request parameters as a JSON object. Query-encoded for GET/HEAD,
/// sent as the JSON body otherwise.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Versioned prefix shared by every catalog path except the OAuth token one.
pub const API_PREFIX: &str = "/api/v2";

/// How many decorators may be stacked on top of a plain endpoint.
pub const MAX_DECORATOR_DEPTH: usize = 2;

/// The viewer's relationship to another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipPriority {
    Following,
    Starred,
    Block,
    Mute,
    Inactive,
    None,
    Me,
}

impl RelationshipPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipPriority::Following => "friend",
            RelationshipPriority::Starred => "noise",
            RelationshipPriority::Block => "block",
            RelationshipPriority::Mute => "mute",
            RelationshipPriority::Inactive => "inactive",
            RelationshipPriority::None => "none",
            RelationshipPriority::Me => "self",
        }
    }
}

impl fmt::Display for RelationshipPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AmazonCredentials,
    AmazonLoggingCredentials,
    Announcements,
    AnnouncementsNewContent {
        created_at: Option<DateTime<Utc>>,
    },
    ArtistInvites,
    ArtistInviteDetail {
        id: String,
    },
    ArtistInviteSubmissions,
    MarkAnnouncementAsRead,
    AnonymousCredentials,
    Auth {
        email: String,
        password: String,
    },
    Availability {
        content: BTreeMap<String, String>,
    },
    Categories,
    Category {
        slug: String,
    },
    CategoryPosts {
        slug: String,
    },
    CategoryPostActions,
    CommentDetail {
        post_id: String,
        comment_id: String,
    },
    CreateCategoryUser {
        category_id: String,
        user_id: String,
        role: String,
    },
    CreateComment {
        parent_post_id: String,
        body: Parameters,
    },
    CreateLove {
        post_id: String,
    },
    CreatePost {
        body: Parameters,
    },
    CreateWatchPost {
        post_id: String,
    },
    Custom(Custom),
    CustomRequest(CustomRequest),
    DeleteCategoryUser {
        id: String,
    },
    DeleteComment {
        post_id: String,
        comment_id: String,
    },
    DeleteLove {
        post_id: String,
    },
    DeletePost {
        post_id: String,
    },
    DeleteSubscriptions {
        token: Vec<u8>,
    },
    DeleteWatchPost {
        post_id: String,
    },
    EditCategoryUser {
        category_id: String,
        user_id: String,
        role: String,
    },
    Editorials,
    EmojiAutoComplete {
        terms: String,
    },
    FindFriends {
        contacts: BTreeMap<String, Vec<String>>,
    },
    FlagComment {
        post_id: String,
        comment_id: String,
        kind: String,
    },
    FlagPost {
        post_id: String,
        kind: String,
    },
    FlagUser {
        user_id: String,
        kind: String,
    },
    Following,
    FollowingNewContent {
        created_at: Option<DateTime<Utc>>,
    },
    Hire {
        user_id: String,
        body: String,
    },
    Collaborate {
        user_id: String,
        body: String,
    },
    InfiniteScroll(InfiniteScroll),
    Invitations {
        emails: Vec<String>,
    },
    InviteFriends {
        email: String,
    },
    Join {
        email: String,
        username: String,
        password: String,
        nonce: String,
        invitation_code: Option<String>,
    },
    JoinNonce,
    LocationAutoComplete {
        terms: String,
    },
    NotificationsNewContent {
        created_at: Option<DateTime<Utc>>,
    },
    NotificationsStream {
        category: Option<String>,
    },
    PostComments {
        post_id: String,
    },
    PostDetail {
        post_param: String,
    },
    PostViews {
        stream_id: Option<String>,
        stream_kind: String,
        post_ids: BTreeSet<String>,
        current_user_id: Option<String>,
    },
    PromotionalViews {
        tokens: BTreeSet<String>,
    },
    PostLovers {
        post_id: String,
    },
    PostReplyAll {
        post_id: String,
    },
    PostRelatedPosts {
        post_id: String,
    },
    PostReposters {
        post_id: String,
    },
    CurrentUserBlockedList,
    CurrentUserMutedList,
    CurrentUserProfile,
    ProfileDelete,
    ProfileToggles,
    ProfileUpdate {
        body: Parameters,
    },
    PushSubscriptions {
        token: Vec<u8>,
    },
    ReAuth {
        refresh_token: String,
    },
    RePost {
        post_id: String,
    },
    Relationship {
        user_id: String,
        relationship: RelationshipPriority,
    },
    RelationshipBatch {
        user_ids: Vec<String>,
        relationship: RelationshipPriority,
    },
    ResetPassword {
        password: String,
        auth_token: String,
    },
    RequestPasswordReset {
        email: String,
    },
    SearchForUsers {
        terms: String,
    },
    SearchForPosts {
        terms: String,
    },
    UpdatePost {
        post_id: String,
        body: Parameters,
    },
    UpdateComment {
        post_id: String,
        comment_id: String,
        body: Parameters,
    },
    UserCategories {
        category_ids: BTreeSet<String>,
        onboarding: bool,
    },
    UserStream {
        user_param: String,
    },
    UserStreamFollowers {
        user_id: String,
    },
    UserStreamFollowing {
        user_id: String,
    },
    UserStreamPosts {
        user_id: String,
    },
    UserNameAutoComplete {
        terms: String,
    },
}

/// A raw URL fetched with GET, shaped like `mimics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custom {
    url: Url,
    mimics: Box<Endpoint>,
}

impl Custom {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn mimics(&self) -> &Endpoint {
        &self.mimics
    }
}

/// A fully specified request, shaped like `mimics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRequest {
    request: RequestDescriptor,
    mimics: Box<Endpoint>,
}

impl CustomRequest {
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    pub fn mimics(&self) -> &Endpoint {
        &self.mimics
    }
}

/// The next page of `api`'s listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteScroll {
    continuation: Continuation,
    api: Box<Endpoint>,
}

impl InfiniteScroll {
    pub fn continuation(&self) -> &Continuation {
        &self.continuation
    }

    pub fn api(&self) -> &Endpoint {
        &self.api
    }
}

impl Endpoint {
    pub fn custom(url: Url, mimics: Endpoint) -> Result<Self, EndpointError> {
        let mimics = checked_wrap(mimics)?;
        Ok(Endpoint::Custom(Custom { url, mimics }))
    }

    pub fn custom_request(request: RequestDescriptor, mimics: Endpoint) -> Result<Self, EndpointError> {
        let mimics = checked_wrap(mimics)?;
        Ok(Endpoint::CustomRequest(CustomRequest { request, mimics }))
    }

    pub fn infinite_scroll(continuation: Continuation, api: Endpoint) -> Result<Self, EndpointError> {
        let api = checked_wrap(api)?;
        Ok(Endpoint::InfiniteScroll(InfiniteScroll { continuation, api }))
    }

    /// `CustomRequest` around a variant known to be plain; cannot exceed the
    /// depth limit.
    pub(crate) fn request_mimicking(request: RequestDescriptor, mimics: Endpoint) -> Self {
        debug_assert!(!mimics.is_decorator());
        Endpoint::CustomRequest(CustomRequest {
            request,
            mimics: Box::new(mimics),
        })
    }

    /// The endpoint a decorator delegates to, `None` for plain variants.
    pub fn wrapped(&self) -> Option<&Endpoint> {
        match self {
            Endpoint::Custom(custom) => Some(&*custom.mimics),
            Endpoint::CustomRequest(custom) => Some(&*custom.mimics),
            Endpoint::InfiniteScroll(scroll) => Some(&*scroll.api),
            _ => None,
        }
    }

    pub fn is_decorator(&self) -> bool {
        self.wrapped().is_some()
    }

    /// Number of decorators stacked on top of the innermost plain variant.
    pub fn decorator_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(inner) = current.wrapped() {
            depth += 1;
            current = inner;
        }
        depth
    }
}

fn checked_wrap(inner: Endpoint) -> Result<Box<Endpoint>, EndpointError> {
    let depth = inner.decorator_depth() + 1;
    if depth > MAX_DECORATOR_DEPTH {
        return Err(EndpointError::NestingTooDeep {
            depth,
            max: MAX_DECORATOR_DEPTH,
        });
    }
    Ok(Box::new(inner))
}
