use serde_json::{json, Value};
use sha1::{Digest, Sha1};

use crate::config::ClientConfig;
use crate::http::HttpMethod;
use crate::query::parse_query;

use super::{Endpoint, Parameters};

const PER_PAGE: u64 = 10;
const RELATED_POSTS_PER_PAGE: u64 = 4;

impl Endpoint {
    /// Query or body parameters, `None` when the call sends none.
    ///
    /// `config` supplies the OAuth client credentials, the contact-hash salt
    /// and the bundle identifiers a few operations report.
    pub fn parameters(&self, config: &ClientConfig) -> Option<Parameters> {
        let params = match self {
            Endpoint::AnonymousCredentials => json!({
                "client_id": config.client_key,
                "client_secret": config.client_secret,
                "grant_type": "client_credentials",
            }),
            Endpoint::Auth { email, password } => json!({
                "client_id": config.client_key,
                "client_secret": config.client_secret,
                "email": email,
                "password": password,
                "grant_type": "password",
            }),
            Endpoint::ReAuth { refresh_token } => json!({
                "client_id": config.client_key,
                "client_secret": config.client_secret,
                "grant_type": "refresh_token",
                "refresh_token": refresh_token,
            }),
            Endpoint::Availability { content } => json!(content),
            Endpoint::Custom(custom) => return custom.url().query().map(parse_query),
            Endpoint::CustomRequest(custom) => {
                let request = custom.request();
                if let Some(parameters) = request.parameters() {
                    return Some(
                        parameters
                            .iter()
                            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                            .collect(),
                    );
                }
                if request.method() == HttpMethod::Get {
                    return request.url().query().map(parse_query);
                }
                return None;
            }
            Endpoint::InfiniteScroll(scroll) => {
                let continuation = scroll.continuation().parameters()?;
                let mut merged = scroll.api().parameters(config).unwrap_or_default();
                merged.extend(continuation);
                return Some(merged);
            }
            Endpoint::CurrentUserProfile => json!({ "post_count": 0 }),
            Endpoint::CreateCategoryUser {
                category_id,
                user_id,
                role,
            }
            | Endpoint::EditCategoryUser {
                category_id,
                user_id,
                role,
            } => json!({
                "category_id": category_id,
                "user_id": user_id,
                "role": role,
            }),
            Endpoint::CreateComment { body, .. }
            | Endpoint::CreatePost { body }
            | Endpoint::ProfileUpdate { body }
            | Endpoint::UpdatePost { body, .. }
            | Endpoint::UpdateComment { body, .. } => return Some(body.clone()),
            Endpoint::Categories => json!({ "meta": true }),
            Endpoint::CategoryPosts { .. }
            | Endpoint::Following
            | Endpoint::PostComments { .. }
            | Endpoint::UserStreamPosts { .. } => json!({ "per_page": PER_PAGE }),
            Endpoint::Collaborate { body, .. } | Endpoint::Hire { body, .. } => {
                json!({ "body": body })
            }
            Endpoint::FindFriends { contacts } => {
                let hashed: serde_json::Map<String, Value> = contacts
                    .iter()
                    .map(|(key, emails)| {
                        let hashes = emails
                            .iter()
                            .map(|email| Value::String(salted_sha1(&config.contact_hash_salt, email)))
                            .collect();
                        (key.clone(), Value::Array(hashes))
                    })
                    .collect();
                json!({ "contacts": hashed })
            }
            Endpoint::Invitations { emails } => json!({ "email": emails }),
            Endpoint::InviteFriends { email } | Endpoint::RequestPasswordReset { email } => {
                json!({ "email": email })
            }
            Endpoint::Join {
                email,
                username,
                password,
                nonce,
                invitation_code,
            } => {
                let mut params = json!({
                    "email": email,
                    "username": username,
                    "password": password,
                    "password_confirmation": password,
                    "nonce": nonce,
                });
                if let Some(code) = invitation_code {
                    params["invitation_code"] = json!(code);
                }
                params
            }
            Endpoint::LocationAutoComplete { terms } => json!({ "location": terms }),
            Endpoint::NotificationsStream { category } => {
                let mut params = json!({ "per_page": PER_PAGE });
                if let Some(category) = category {
                    params["category"] = json!(category);
                }
                params
            }
            Endpoint::PostDetail { .. } => json!({ "comment_count": 0 }),
            Endpoint::PostRelatedPosts { .. } => json!({ "per_page": RELATED_POSTS_PER_PAGE }),
            Endpoint::PostViews {
                stream_id,
                stream_kind,
                post_ids,
                current_user_id,
            } => {
                let mut params = json!({
                    "post_ids": join_ids(post_ids),
                    "kind": stream_kind,
                });
                if let Some(stream_id) = stream_id {
                    params["id"] = json!(stream_id);
                }
                if let Some(user_id) = current_user_id {
                    params["user_id"] = json!(user_id);
                }
                params
            }
            Endpoint::PromotionalViews { tokens } => json!({
                "tokens": join_ids(tokens),
                "kind": "promo",
            }),
            Endpoint::PushSubscriptions { .. } | Endpoint::DeleteSubscriptions { .. } => json!({
                "bundle_identifier": config.bundle_identifier,
                "marketing_version": config.marketing_version,
                "build_version": config.build_version,
            }),
            Endpoint::RelationshipBatch {
                user_ids,
                relationship,
            } => json!({
                "user_ids": user_ids,
                "priority": relationship.as_str(),
            }),
            // The server expects a numeric id; -1 marks an unparseable one.
            Endpoint::RePost { post_id } => {
                json!({ "repost_id": post_id.parse::<i64>().unwrap_or(-1) })
            }
            Endpoint::ResetPassword {
                password,
                auth_token,
            } => json!({
                "password": password,
                "reset_password_token": auth_token,
            }),
            Endpoint::SearchForPosts { terms } | Endpoint::SearchForUsers { terms } => json!({
                "terms": terms,
                "per_page": PER_PAGE,
            }),
            Endpoint::UserCategories {
                category_ids,
                onboarding,
            } => json!({
                "followed_category_ids": category_ids,
                "disable_follows": !onboarding,
            }),
            Endpoint::UserNameAutoComplete { terms } => json!({ "terms": terms }),
            Endpoint::UserStream { .. } => json!({ "post_count": "false" }),
            Endpoint::AmazonCredentials
            | Endpoint::AmazonLoggingCredentials
            | Endpoint::Announcements
            | Endpoint::AnnouncementsNewContent { .. }
            | Endpoint::ArtistInvites
            | Endpoint::ArtistInviteDetail { .. }
            | Endpoint::ArtistInviteSubmissions
            | Endpoint::MarkAnnouncementAsRead
            | Endpoint::Category { .. }
            | Endpoint::CategoryPostActions
            | Endpoint::CommentDetail { .. }
            | Endpoint::CreateLove { .. }
            | Endpoint::CreateWatchPost { .. }
            | Endpoint::DeleteCategoryUser { .. }
            | Endpoint::DeleteComment { .. }
            | Endpoint::DeleteLove { .. }
            | Endpoint::DeletePost { .. }
            | Endpoint::DeleteWatchPost { .. }
            | Endpoint::Editorials
            | Endpoint::EmojiAutoComplete { .. }
            | Endpoint::FlagComment { .. }
            | Endpoint::FlagPost { .. }
            | Endpoint::FlagUser { .. }
            | Endpoint::FollowingNewContent { .. }
            | Endpoint::JoinNonce
            | Endpoint::NotificationsNewContent { .. }
            | Endpoint::PostLovers { .. }
            | Endpoint::PostReplyAll { .. }
            | Endpoint::PostReposters { .. }
            | Endpoint::CurrentUserBlockedList
            | Endpoint::CurrentUserMutedList
            | Endpoint::ProfileDelete
            | Endpoint::ProfileToggles
            | Endpoint::Relationship { .. }
            | Endpoint::UserStreamFollowers { .. }
            | Endpoint::UserStreamFollowing { .. } => return None,
        };
        match params {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

fn join_ids<'a>(ids: impl IntoIterator<Item = &'a String>) -> String {
    ids.into_iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

fn salted_sha1(salt: &str, value: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(salt.as_bytes());
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
