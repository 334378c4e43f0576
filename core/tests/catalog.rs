//! Properties that hold across the whole endpoint catalog.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{TimeZone, Utc};
use ello_core::{
    ApiClient, AuthToken, ClientConfig, Continuation, Credentials, Endpoint, EndpointError,
    HttpMethod, ParameterEncoding, Parameters, RelationshipPriority,
};
use serde_json::Value;
use url::Url;

fn s(v: &str) -> String {
    v.to_string()
}

fn body() -> Parameters {
    let mut body = Parameters::new();
    body.insert(s("body"), Value::String(s("hi")));
    body
}

/// One instance of every non-decorator variant.
fn catalog() -> Vec<Endpoint> {
    let since = Some(Utc.with_ymd_and_hms(2014, 6, 3, 0, 0, 0).unwrap());
    vec![
        Endpoint::AmazonCredentials,
        Endpoint::AmazonLoggingCredentials,
        Endpoint::Announcements,
        Endpoint::AnnouncementsNewContent { created_at: since },
        Endpoint::ArtistInvites,
        Endpoint::ArtistInviteDetail { id: s("1") },
        Endpoint::ArtistInviteSubmissions,
        Endpoint::MarkAnnouncementAsRead,
        Endpoint::AnonymousCredentials,
        Endpoint::Auth {
            email: s("a@b.co"),
            password: s("pw"),
        },
        Endpoint::Availability {
            content: BTreeMap::from([(s("username"), s("bob"))]),
        },
        Endpoint::Categories,
        Endpoint::Category { slug: s("art") },
        Endpoint::CategoryPosts { slug: s("art") },
        Endpoint::CategoryPostActions,
        Endpoint::CommentDetail {
            post_id: s("1"),
            comment_id: s("2"),
        },
        Endpoint::CreateCategoryUser {
            category_id: s("1"),
            user_id: s("2"),
            role: s("moderator"),
        },
        Endpoint::CreateComment {
            parent_post_id: s("1"),
            body: body(),
        },
        Endpoint::CreateLove { post_id: s("1") },
        Endpoint::CreatePost { body: body() },
        Endpoint::CreateWatchPost { post_id: s("1") },
        Endpoint::DeleteCategoryUser { id: s("1") },
        Endpoint::DeleteComment {
            post_id: s("1"),
            comment_id: s("2"),
        },
        Endpoint::DeleteLove { post_id: s("1") },
        Endpoint::DeletePost { post_id: s("1") },
        Endpoint::DeleteSubscriptions {
            token: vec![0xde, 0xad],
        },
        Endpoint::DeleteWatchPost { post_id: s("1") },
        Endpoint::EditCategoryUser {
            category_id: s("1"),
            user_id: s("2"),
            role: s("curator"),
        },
        Endpoint::Editorials,
        Endpoint::EmojiAutoComplete { terms: s("smi") },
        Endpoint::FindFriends {
            contacts: BTreeMap::from([(s("1"), vec![s("a@b.co")])]),
        },
        Endpoint::FlagComment {
            post_id: s("1"),
            comment_id: s("2"),
            kind: s("spam"),
        },
        Endpoint::FlagPost {
            post_id: s("1"),
            kind: s("spam"),
        },
        Endpoint::FlagUser {
            user_id: s("1"),
            kind: s("spam"),
        },
        Endpoint::Following,
        Endpoint::FollowingNewContent { created_at: since },
        Endpoint::Hire {
            user_id: s("1"),
            body: s("hello"),
        },
        Endpoint::Collaborate {
            user_id: s("1"),
            body: s("hello"),
        },
        Endpoint::Invitations {
            emails: vec![s("a@b.co")],
        },
        Endpoint::InviteFriends { email: s("a@b.co") },
        Endpoint::Join {
            email: s("a@b.co"),
            username: s("bob"),
            password: s("pw"),
            nonce: s("n"),
            invitation_code: None,
        },
        Endpoint::JoinNonce,
        Endpoint::LocationAutoComplete { terms: s("den") },
        Endpoint::NotificationsNewContent { created_at: since },
        Endpoint::NotificationsStream { category: None },
        Endpoint::PostComments { post_id: s("1") },
        Endpoint::PostDetail {
            post_param: s("~slug"),
        },
        Endpoint::PostViews {
            stream_id: None,
            stream_kind: s("following"),
            post_ids: BTreeSet::from([s("1"), s("2")]),
            current_user_id: None,
        },
        Endpoint::PromotionalViews {
            tokens: BTreeSet::from([s("t")]),
        },
        Endpoint::PostLovers { post_id: s("1") },
        Endpoint::PostReplyAll { post_id: s("1") },
        Endpoint::PostRelatedPosts { post_id: s("1") },
        Endpoint::PostReposters { post_id: s("1") },
        Endpoint::CurrentUserBlockedList,
        Endpoint::CurrentUserMutedList,
        Endpoint::CurrentUserProfile,
        Endpoint::ProfileDelete,
        Endpoint::ProfileToggles,
        Endpoint::ProfileUpdate { body: body() },
        Endpoint::PushSubscriptions {
            token: vec![0xbe, 0xef],
        },
        Endpoint::ReAuth {
            refresh_token: s("r"),
        },
        Endpoint::RePost { post_id: s("1") },
        Endpoint::Relationship {
            user_id: s("1"),
            relationship: RelationshipPriority::Starred,
        },
        Endpoint::RelationshipBatch {
            user_ids: vec![s("1"), s("2")],
            relationship: RelationshipPriority::Following,
        },
        Endpoint::ResetPassword {
            password: s("pw"),
            auth_token: s("t"),
        },
        Endpoint::RequestPasswordReset { email: s("a@b.co") },
        Endpoint::SearchForUsers { terms: s("bob") },
        Endpoint::SearchForPosts { terms: s("cats") },
        Endpoint::UpdatePost {
            post_id: s("1"),
            body: body(),
        },
        Endpoint::UpdateComment {
            post_id: s("1"),
            comment_id: s("2"),
            body: body(),
        },
        Endpoint::UserCategories {
            category_ids: BTreeSet::from([s("1")]),
            onboarding: false,
        },
        Endpoint::UserStream {
            user_param: s("~bob"),
        },
        Endpoint::UserStreamFollowers { user_id: s("1") },
        Endpoint::UserStreamFollowing { user_id: s("1") },
        Endpoint::UserStreamPosts { user_id: s("1") },
        Endpoint::UserNameAutoComplete { terms: s("bo") },
    ]
}

fn client() -> ApiClient {
    ApiClient::new(ClientConfig::new("http://localhost:3000"))
}

#[test]
fn catalog_lists_every_plain_variant() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 76);
    assert!(catalog.iter().all(|e| !e.is_decorator()));
}

#[test]
fn encoding_follows_method() {
    for endpoint in catalog() {
        let expected = match endpoint.method() {
            HttpMethod::Get | HttpMethod::Head => ParameterEncoding::Query,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete => {
                ParameterEncoding::JsonBody
            }
        };
        assert_eq!(endpoint.parameter_encoding(), expected, "{endpoint:?}");
    }
}

#[test]
fn anonymous_support_implies_token_requirement() {
    for endpoint in catalog() {
        if !endpoint.requires_any_token() {
            assert!(!endpoint.supports_anonymous_token(), "{endpoint:?}");
        }
    }
}

#[test]
fn every_endpoint_builds_against_the_api() {
    let credentials = Credentials::with_token(AuthToken::anonymous("anon"));
    for endpoint in catalog() {
        assert!(endpoint.path().starts_with("/api/"), "{endpoint:?}");

        let req = client().build(&endpoint, &credentials).unwrap();
        assert_eq!(req.method, endpoint.method(), "{endpoint:?}");
        match endpoint.parameter_encoding() {
            ParameterEncoding::Query => assert!(req.body.is_none(), "{endpoint:?}"),
            ParameterEncoding::JsonBody => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert!(body.is_object(), "{endpoint:?}");
            }
        }
        assert_eq!(
            req.header("Authorization").is_some(),
            endpoint.requires_any_token(),
            "{endpoint:?}"
        );
    }
}

#[test]
fn only_new_content_polls_are_conditional() {
    for endpoint in catalog() {
        let conditional = client()
            .build(&endpoint, &Credentials::none())
            .unwrap()
            .header("If-Modified-Since")
            .is_some();
        let is_poll = matches!(
            endpoint,
            Endpoint::AnnouncementsNewContent { .. }
                | Endpoint::FollowingNewContent { .. }
                | Endpoint::NotificationsNewContent { .. }
        );
        assert_eq!(conditional, is_poll, "{endpoint:?}");
        assert_eq!(endpoint.method() == HttpMethod::Head, is_poll, "{endpoint:?}");
    }
}

#[test]
fn every_fixture_is_json() {
    for endpoint in catalog() {
        let sample: Result<Value, _> = serde_json::from_str(endpoint.sample_data());
        assert!(sample.is_ok(), "{endpoint:?}: {}", endpoint.fixture().name());
    }
}

#[test]
fn custom_delegates_to_mimicked_endpoint() {
    let url = Url::parse("https://ello.co/api/v2/anything?page=2").unwrap();
    for endpoint in catalog() {
        let custom = Endpoint::custom(url.clone(), endpoint.clone()).unwrap();
        assert_eq!(custom.method(), HttpMethod::Get);
        assert_eq!(custom.path(), "/api/v2/anything");
        assert_eq!(custom.mapping_type(), endpoint.mapping_type(), "{endpoint:?}");
        assert_eq!(custom.requires_any_token(), endpoint.requires_any_token());
        assert_eq!(custom.supports_anonymous_token(), endpoint.supports_anonymous_token());
        assert_eq!(custom.fixture(), endpoint.fixture());
        assert_eq!(custom.wrapped(), Some(&endpoint));
    }
}

#[test]
fn infinite_scroll_keeps_inner_method() {
    let next = Continuation::new("/api/v2/next", vec![(s("before"), s("x"))]);
    for endpoint in catalog() {
        let scroll = Endpoint::infinite_scroll(next.clone(), endpoint.clone()).unwrap();
        assert_eq!(scroll.method(), endpoint.method(), "{endpoint:?}");
        assert_eq!(
            scroll.parameters(client().config()).unwrap()["before"],
            "x",
            "{endpoint:?}"
        );
        let expected_path = endpoint.paging_path().unwrap_or_else(|| s("/api/v2/next"));
        assert_eq!(scroll.path(), expected_path, "{endpoint:?}");
    }
}

#[test]
fn nesting_is_capped() {
    let next = Continuation::new("/api/v2/next", Vec::new());
    let url = Url::parse("https://ello.co/api/v2/x").unwrap();

    let once = Endpoint::custom(url.clone(), Endpoint::Following).unwrap();
    let twice = Endpoint::infinite_scroll(next.clone(), once).unwrap();
    assert_eq!(twice.decorator_depth(), 2);

    let err = Endpoint::custom(url, twice).unwrap_err();
    assert_eq!(err, EndpointError::NestingTooDeep { depth: 3, max: 2 });
}
