//! Content and media generators.

use chrono::Duration;
use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const POST_STATUSES: &[&str] = &["draft", "published", "scheduled", "archived"];
const POST_CATEGORIES: &[&str] = &[
    "Technology",
    "Business",
    "Lifestyle",
    "Travel",
    "Food",
    "Health",
    "Finance",
];
const EVENT_TYPES: &[&str] = &[
    "conference",
    "workshop",
    "meetup",
    "webinar",
    "concert",
    "festival",
    "networking",
    "exhibition",
];
const EVENT_STATUSES: &[&str] = &["draft", "published", "cancelled", "postponed", "completed"];
const VENUE_SUFFIXES: &[&str] = &["Center", "Hall", "Arena", "Theater"];
const TICKET_TIERS: &[&str] = &["General Admission", "VIP", "Early Bird", "Student"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("blog_post", blog_post);
    registry.insert("event", event);
}

fn blog_post(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let slug = source::slugify(&source.words(5));
    let published_at = source.datetime_recent(730);
    let updated_at = source.datetime_between(published_at, source.reference_datetime());

    let tag_count = source.int(2, 6);
    let tags: Vec<Value> = (0..tag_count).map(|_| Value::from(source.word())).collect();
    let keyword_count = source.int(3, 8);
    let keywords: Vec<Value> = (0..keyword_count)
        .map(|_| Value::from(source.word()))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "slug": slug,
        "title": source.sentence(5, 12),
        "excerpt": source.paragraph(),
        "content": source.paragraphs(8),
        "featuredImage": source.image_url(),
        "status": source.pick(POST_STATUSES),
        "author": {
            "id": source.uuid(),
            "name": source.full_name(),
            "avatar": source.avatar_url(),
            "bio": source.sentence(3, 10),
        },
        "category": source.pick(POST_CATEGORIES),
        "tags": tags,
        "readingTime": source.int(2, 20),
        "views": source.int(0, 100_000),
        "likes": source.int(0, 5000),
        "commentsCount": source.int(0, 200),
        "isFeatured": source.boolean(),
        "allowComments": source.boolean(),
        "seo": {
            "metaTitle": source.sentence(5, 10),
            "metaDescription": source.sentence(10, 20),
            "keywords": keywords,
        },
        "publishedAt": source::iso_datetime(published_at),
        "updatedAt": source::iso_datetime(updated_at),
    }))
}

fn event(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let start_date = source.datetime_soon(365);
    let end_date = start_date + Duration::hours(source.int(1, 72));
    let capacity = source.int(10, 1000);
    let registration_deadline = source.datetime_between(source.reference_datetime(), start_date);

    let speaker_count = source.int(1, 5);
    let mut speakers = Vec::with_capacity(speaker_count as usize);
    for _ in 0..speaker_count {
        speakers.push(json!({
            "id": source.uuid(),
            "name": source.full_name(),
            "title": source.job_title(),
            "avatar": source.avatar_url(),
            "bio": source.sentence(3, 10),
        }));
    }

    let ticket_count = source.int(1, 3);
    let mut tickets = Vec::with_capacity(ticket_count as usize);
    for _ in 0..ticket_count {
        tickets.push(json!({
            "id": source.uuid(),
            "name": source.pick(TICKET_TIERS),
            "price": source.price(0.0, 500.0),
            "currency": source.currency_code(),
            "available": source.int(0, 500),
        }));
    }

    let category_count = source.int(1, 3);
    let categories: Vec<Value> = (0..category_count)
        .map(|_| Value::from(source.word()))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "name": source.sentence(3, 8),
        "description": source.paragraphs(3),
        "type": source.pick(EVENT_TYPES),
        "status": source.pick(EVENT_STATUSES),
        "startDate": source::iso_datetime(start_date),
        "endDate": source::iso_datetime(end_date),
        "timezone": source.time_zone(),
        "venue": {
            "name": format!("{} {}", source.company_name(), source.pick(VENUE_SUFFIXES)),
            "address": source.street_address(),
            "city": source.city(),
            "country": source.country(),
            "coordinates": {
                "latitude": source.latitude(),
                "longitude": source.longitude(),
            },
        },
        "isVirtual": source.boolean(),
        "virtualUrl": source.maybe(|source| Value::from(source.url())),
        "coverImage": source.image_url(),
        "organizer": {
            "id": source.uuid(),
            "name": source.company_name(),
            "email": source.email(),
            "logo": source.image_url(),
        },
        "speakers": speakers,
        "tickets": tickets,
        "capacity": capacity,
        "registrations": source.int(0, capacity),
        "categories": categories,
        "isFree": source.boolean(),
        "registrationDeadline": source::iso_datetime(registration_deadline),
    }))
}
