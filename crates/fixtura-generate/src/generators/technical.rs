//! Technical generators: API envelopes and log entries.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const SUCCESS_CODES: &[i64] = &[200, 201, 204];
const FAILURE_CODES: &[i64] = &[400, 401, 403, 404, 500, 502, 503];
const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error", "fatal"];
const SERVICES: &[&str] = &["api", "auth", "database", "cache", "queue", "scheduler", "webhook"];
const ENVIRONMENTS: &[&str] = &["development", "staging", "production"];
const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];
const LOG_STATUS_CODES: &[i64] = &[200, 201, 400, 401, 403, 404, 500];
const PAGE_SIZES: &[i64] = &[10, 20, 50, 100];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("api_response", api_response);
    registry.insert("log_entry", log_entry);
}

fn api_response(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let success = match options.bool("success") {
        Some(success) => success,
        None => source.boolean(),
    };

    let status_code = if success {
        source.pick_i64(SUCCESS_CODES)
    } else {
        source.pick_i64(FAILURE_CODES)
    };

    let message = if success {
        Value::from("Request successful")
    } else {
        Value::from(source.sentence(3, 10))
    };

    let data = if success {
        json!({
            "id": source.uuid(),
            "createdAt": source.timestamp_recent(1),
            "updatedAt": source.timestamp_recent(1),
        })
    } else {
        Value::Null
    };

    let error = if success {
        Value::Null
    } else {
        json!({
            "code": source.alpha_upper(10),
            "message": source.sentence(3, 10),
            "details": source.maybe(|source| Value::from(source.paragraph())),
        })
    };

    Ok(json!({
        "success": success,
        "statusCode": status_code,
        "message": message,
        "data": data,
        "error": error,
        "meta": {
            "requestId": source.uuid(),
            "timestamp": source::iso_datetime(source.reference_datetime()),
            "version": format!(
                "v{}.{}.{}",
                source.int(1, 3),
                source.int(0, 9),
                source.int(0, 9),
            ),
            "rateLimit": {
                "limit": 1000,
                "remaining": source.int(0, 1000),
                "reset": source.timestamp_soon(1),
            },
        },
        "pagination": source.maybe(|source| json!({
            "page": source.int(1, 100),
            "pageSize": source.pick_i64(PAGE_SIZES),
            "totalItems": source.int(0, 10_000),
            "totalPages": source.int(1, 100),
        })),
    }))
}

fn log_entry(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let level = match options.str("level") {
        Some(level) => level.to_string(),
        None => source.pick(LOG_LEVELS),
    };

    // First two components of a directory path, e.g. "/usr/share".
    let dir_path = source.dir_path();
    let path = format!(
        "/{}",
        dir_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .take(2)
            .collect::<Vec<_>>()
            .join("/")
    );

    Ok(json!({
        "id": source.uuid(),
        "timestamp": source.timestamp_recent(7),
        "level": level,
        "message": source.sentence(3, 10),
        "service": source.pick(SERVICES),
        "environment": source.pick(ENVIRONMENTS),
        "requestId": source.uuid(),
        "userId": source.maybe(|source| Value::from(source.uuid())),
        "sessionId": source.maybe(|source| Value::from(source.uuid())),
        "ip": source.ipv4(),
        "userAgent": source.user_agent(),
        "method": source.pick(HTTP_METHODS),
        "path": path,
        "statusCode": source.pick_i64(LOG_STATUS_CODES),
        "responseTime": source.int(1, 5000),
        "metadata": {
            "hostname": source.domain_name(),
            "pid": source.int(1000, 65_535),
            "memory": source.int(100, 8000),
        },
        "stack": source.maybe(|source| Value::from(source.paragraphs(2))),
    }))
}
