//! Social and communication generators.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const PLATFORMS: &[&str] = &[
    "twitter",
    "instagram",
    "linkedin",
    "facebook",
    "tiktok",
    "youtube",
];
const NOTIFICATION_TYPES: &[&str] = &[
    "message", "like", "comment", "follow", "mention", "system", "payment", "reminder", "alert",
];
const NOTIFICATION_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];
const MESSAGE_TYPES: &[&str] = &["text", "image", "file", "audio", "video", "location", "sticker"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("social_profile", social_profile);
    registry.insert("comment", comment);
    registry.insert("notification", notification);
    registry.insert("message", message);
}

fn social_profile(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let platform = match options.str("platform") {
        Some(platform) => platform.to_string(),
        None => source.pick(PLATFORMS),
    };

    Ok(json!({
        "id": source.uuid(),
        "platform": platform,
        "username": source.username(),
        "displayName": source.full_name(),
        "bio": source.sentence(3, 10),
        "avatarUrl": source.avatar_url(),
        "coverImageUrl": source.image_url(),
        "followers": source.int(0, 1_000_000),
        "following": source.int(0, 5000),
        "postsCount": source.int(0, 10_000),
        "isVerified": source.boolean(),
        "isPrivate": source.boolean(),
        "joinedDate": source::iso_date(source.date_past(3650)),
        "website": source.maybe(|source| Value::from(source.url())),
        "location": source.city(),
    }))
}

/// Replies (`parentId` set) always report zero nested replies.
fn comment(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let parent_id = options.get("parentId").cloned().unwrap_or(Value::Null);
    let post_id = match options.str("postId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };
    let replies_count = if parent_id.is_null() {
        source.int(0, 50)
    } else {
        0
    };

    Ok(json!({
        "id": source.uuid(),
        "postId": post_id,
        "parentId": parent_id,
        "authorId": source.uuid(),
        "authorName": source.full_name(),
        "authorAvatar": source.avatar_url(),
        "content": source.paragraph(),
        "likes": source.int(0, 10_000),
        "dislikes": source.int(0, 1000),
        "repliesCount": replies_count,
        "isEdited": source.boolean(),
        "isPinned": source.boolean(),
        "createdAt": source.timestamp_recent(30),
        "updatedAt": source.timestamp_recent(7),
    }))
}

fn notification(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let kind = match options.str("type") {
        Some(kind) => kind.to_string(),
        None => source.pick(NOTIFICATION_TYPES),
    };

    Ok(json!({
        "id": source.uuid(),
        "type": kind,
        "title": source.sentence(3, 8),
        "message": source.sentence(3, 10),
        "isRead": source.boolean(),
        "priority": source.pick(NOTIFICATION_PRIORITIES),
        "actionUrl": source.maybe(|source| Value::from(source.url())),
        "imageUrl": source.maybe(|source| Value::from(source.avatar_url())),
        "senderId": source.maybe(|source| Value::from(source.uuid())),
        "senderName": source.maybe(|source| Value::from(source.full_name())),
        "createdAt": source.timestamp_recent(7),
        "expiresAt": source.maybe(|source| Value::from(source.timestamp_soon(365))),
    }))
}

fn message(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let conversation_id = match options.str("conversationId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };
    let sender_id = match options.str("senderId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };
    let receiver_id = match options.str("receiverId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };

    let reaction_count = source.int(0, 5);
    let mut reactions = Vec::with_capacity(reaction_count as usize);
    for _ in 0..reaction_count {
        reactions.push(json!({
            "emoji": source.emoji(),
            "userId": source.uuid(),
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "conversationId": conversation_id,
        "senderId": sender_id,
        "receiverId": receiver_id,
        "type": source.pick(MESSAGE_TYPES),
        "content": source.paragraph(),
        "attachmentUrl": source.maybe(|source| Value::from(source.url())),
        "isDelivered": source.boolean(),
        "isRead": source.boolean(),
        "replyToId": source.maybe(|source| Value::from(source.uuid())),
        "reactions": reactions,
        "createdAt": source.timestamp_recent(7),
        "editedAt": source.maybe(|source| Value::from(source.timestamp_recent(1))),
    }))
}
