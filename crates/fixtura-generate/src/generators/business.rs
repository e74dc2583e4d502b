//! Business and enterprise generators.

use chrono::Duration;
use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::{GeneratorRegistry, address_object, contact_ref};
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const INVOICE_STATUSES: &[&str] = &["draft", "sent", "paid", "overdue", "cancelled", "refunded"];
const PAYMENT_TERMS: &[&str] = &["Net 15", "Net 30", "Net 60", "Due on receipt"];
const INVOICE_PAYMENT_METHODS: &[&str] = &["bank_transfer", "credit_card", "paypal", "check"];
const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "Legal",
    "Product",
    "Design",
    "Support",
];
const EMPLOYMENT_TYPES: &[&str] = &["full-time", "part-time", "contract", "intern"];
const EMPLOYEE_STATUSES: &[&str] = &["active", "on_leave", "terminated", "suspended"];
const WORK_LOCATIONS: &[&str] = &["office", "remote", "hybrid"];
const RELATIONSHIPS: &[&str] = &["Spouse", "Parent", "Sibling", "Friend"];
const PROJECT_STATUSES: &[&str] = &["planning", "in_progress", "on_hold", "completed", "cancelled"];
const PROJECT_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];
const PROJECT_CATEGORIES: &[&str] = &[
    "Development",
    "Marketing",
    "Research",
    "Infrastructure",
    "Support",
];
const TICKET_STATUSES: &[&str] = &["open", "in_progress", "pending", "resolved", "closed"];
const TICKET_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];
const TICKET_CATEGORIES: &[&str] = &[
    "Technical Support",
    "Billing",
    "Account",
    "Feature Request",
    "Bug Report",
    "General Inquiry",
];
const TICKET_CHANNELS: &[&str] = &["email", "phone", "chat", "web", "social"];
const MEETING_TYPES: &[&str] = &[
    "one_on_one",
    "team",
    "all_hands",
    "interview",
    "external",
    "training",
];
const MEETING_STATUSES: &[&str] = &[
    "scheduled",
    "in_progress",
    "completed",
    "cancelled",
    "rescheduled",
];
const MEETING_DURATIONS: &[i64] = &[15, 30, 45, 60, 90, 120];
const MEETING_PLATFORMS: &[&str] = &["Zoom", "Google Meet", "Teams", "Webex"];
const RECURRENCE_FREQUENCIES: &[&str] = &["daily", "weekly", "biweekly", "monthly"];
const ATTENDEE_STATUSES: &[&str] = &["accepted", "declined", "tentative", "pending"];
const JOB_EMPLOYMENT_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Temporary",
    "Internship",
    "Remote",
];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("company", company);
    registry.insert("invoice", invoice);
    registry.insert("employee", employee);
    registry.insert("project", project);
    registry.insert("ticket", ticket);
    registry.insert("meeting", meeting);
    registry.insert("job_listing", job_listing);
}

fn company(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "name": source.company_name(),
        "industry": source.buzzword(),
        "foundedYear": source.year_past(100),
        "employees": source.int(1, 100_000),
        "revenue": source.int(10_000, 1_000_000_000).to_string(),
        "headquarters": source.city(),
        "ceo": source.full_name(),
        "description": source.catch_phrase(),
        "stockSymbol": source.alpha_upper(4),
        "website": source.url(),
    }))
}

fn invoice(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let item_count = options.i64("itemCount").unwrap_or(3).max(1);

    let mut items = Vec::with_capacity(item_count as usize);
    let mut subtotal = 0.0;
    for _ in 0..item_count {
        let quantity = source.int(1, 10);
        let unit_price = source.price(10.0, 1000.0);
        let total = source::round_currency(quantity as f64 * unit_price);
        subtotal += total;
        items.push(json!({
            "id": source.uuid(),
            "description": source.product_name(),
            "quantity": quantity,
            "unitPrice": unit_price,
            "total": total,
        }));
    }

    let tax = source::round_currency(subtotal * 0.1);
    let discount = source.price(0.0, 50.0);

    Ok(json!({
        "id": source.uuid(),
        "invoiceNumber": format!("INV-{}", source.numeric_string(6)),
        "status": source.pick(INVOICE_STATUSES),
        "issueDate": source::iso_date(source.date_past(30)),
        "dueDate": source::iso_date(source.date_future(36)),
        "client": {
            "id": source.uuid(),
            "name": source.company_name(),
            "email": source.email(),
            "address": address_object(&mut source),
        },
        "items": items,
        "subtotal": source::round_currency(subtotal),
        "taxRate": 10.0,
        "tax": tax,
        "discount": discount,
        "total": source::round_currency(subtotal + tax - discount),
        "currency": source.currency_code(),
        "notes": source.maybe(|source| Value::from(source.sentence(3, 10))),
        "paymentTerms": source.pick(PAYMENT_TERMS),
        "paymentMethod": source.maybe(|source| Value::from(source.pick(INVOICE_PAYMENT_METHODS))),
    }))
}

fn employee(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let department = match options.str("department") {
        Some(department) => department.to_string(),
        None => source.pick(DEPARTMENTS),
    };

    let skill_count = source.int(2, 6);
    let skills: Vec<Value> = (0..skill_count)
        .map(|_| Value::from(source.job_area()))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "employeeId": format!("EMP-{}", source.numeric_string(6)),
        "firstName": source.first_name(),
        "lastName": source.last_name(),
        "email": source.email(),
        "phone": source.phone_number(),
        "avatar": source.avatar_url(),
        "department": department,
        "jobTitle": source.job_title(),
        "employmentType": source.pick(EMPLOYMENT_TYPES),
        "status": source.pick(EMPLOYEE_STATUSES),
        "manager": source.maybe(|source| json!({
            "id": source.uuid(),
            "name": source.full_name(),
        })),
        "salary": {
            "amount": source.int(30_000, 200_000),
            "currency": source.currency_code(),
            "frequency": "yearly",
        },
        "hireDate": source::iso_date(source.date_past(3650)),
        "terminationDate": source.maybe(|source| {
            Value::from(source::iso_date(source.date_future(365)))
        }),
        "workLocation": source.pick(WORK_LOCATIONS),
        "office": {
            "building": source.building_number(),
            "floor": source.int(1, 50),
            "desk": source.alphanumeric_upper(4),
        },
        "skills": skills,
        "emergencyContact": {
            "name": source.full_name(),
            "relationship": source.pick(RELATIONSHIPS),
            "phone": source.phone_number(),
        },
    }))
}

fn project(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let start_date = source.date_past(365);
    let end_date = source.date_future(365);

    let team_size = source.int(2, 8);
    let mut team = Vec::with_capacity(team_size as usize);
    for _ in 0..team_size {
        team.push(json!({
            "id": source.uuid(),
            "name": source.full_name(),
            "role": source.job_title(),
        }));
    }

    let milestone_count = source.int(2, 5);
    let mut milestones = Vec::with_capacity(milestone_count as usize);
    for _ in 0..milestone_count {
        milestones.push(json!({
            "id": source.uuid(),
            "name": source.words(3),
            "dueDate": source::iso_date(source.date_between(start_date, end_date)),
            "completed": source.boolean(),
        }));
    }

    let tag_count = source.int(1, 4);
    let tags: Vec<Value> = (0..tag_count).map(|_| Value::from(source.word())).collect();

    Ok(json!({
        "id": source.uuid(),
        "name": source.catch_phrase(),
        "code": format!("{}-{}", source.alpha_upper(3), source.numeric_string(4)),
        "description": source.paragraphs(2),
        "status": source.pick(PROJECT_STATUSES),
        "priority": source.pick(PROJECT_PRIORITIES),
        "category": source.pick(PROJECT_CATEGORIES),
        "startDate": source::iso_date(start_date),
        "endDate": source::iso_date(end_date),
        "budget": {
            "allocated": source.int(10_000, 1_000_000),
            "spent": source.int(0, 500_000),
            "currency": source.currency_code(),
        },
        "progress": source.int(0, 100),
        "owner": contact_ref(&mut source),
        "team": team,
        "milestones": milestones,
        "tags": tags,
        "repositoryUrl": source.maybe(|source| Value::from(source.url())),
        "documentationUrl": source.maybe(|source| Value::from(source.url())),
    }))
}

fn ticket(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let customer_id = match options.str("customerId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };

    let tag_count = source.int(0, 4);
    let tags: Vec<Value> = (0..tag_count).map(|_| Value::from(source.word())).collect();

    let attachment_count = source.int(0, 3);
    let mut attachments = Vec::with_capacity(attachment_count as usize);
    for _ in 0..attachment_count {
        attachments.push(json!({
            "id": source.uuid(),
            "filename": source.file_name(),
            "size": source.int(1000, 10_000_000),
            "url": source.url(),
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "ticketNumber": format!("TKT-{}", source.numeric_string(8)),
        "subject": source.sentence(4, 10),
        "description": source.paragraphs(2),
        "status": source.pick(TICKET_STATUSES),
        "priority": source.pick(TICKET_PRIORITIES),
        "category": source.pick(TICKET_CATEGORIES),
        "channel": source.pick(TICKET_CHANNELS),
        "customer": {
            "id": customer_id,
            "name": source.full_name(),
            "email": source.email(),
        },
        "assignee": source.maybe(|source| json!({
            "id": source.uuid(),
            "name": source.full_name(),
            "department": "Support",
        })),
        "tags": tags,
        "attachments": attachments,
        "createdAt": source.timestamp_recent(30),
        "updatedAt": source.timestamp_recent(7),
        "resolvedAt": source.maybe(|source| Value::from(source.timestamp_recent(3))),
        "firstResponseTime": source.int(1, 1440),
        "satisfactionRating": source.maybe(|source| Value::from(source.int(1, 5))),
    }))
}

fn meeting(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let start_time = source.datetime_soon(36);
    let duration = source.pick_i64(MEETING_DURATIONS);
    let end_time = start_time + Duration::minutes(duration);

    let location = if source.boolean() {
        json!({
            "type": "virtual",
            "url": source.url(),
            "platform": source.pick(MEETING_PLATFORMS),
        })
    } else {
        json!({
            "type": "physical",
            "room": format!("Room {}", source.alphanumeric_upper(3)),
            "building": source.building_number(),
        })
    };

    let attendee_count = source.int(1, 10);
    let mut attendees = Vec::with_capacity(attendee_count as usize);
    for _ in 0..attendee_count {
        attendees.push(json!({
            "id": source.uuid(),
            "name": source.full_name(),
            "email": source.email(),
            "status": source.pick(ATTENDEE_STATUSES),
            "isOptional": source.boolean(),
        }));
    }

    let agenda_count = source.int(1, 5);
    let agenda: Vec<Value> = (0..agenda_count)
        .map(|_| Value::from(source.sentence(3, 10)))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "title": source.sentence(3, 8),
        "description": source.paragraph(),
        "type": source.pick(MEETING_TYPES),
        "status": source.pick(MEETING_STATUSES),
        "startTime": source::iso_datetime(start_time),
        "endTime": source::iso_datetime(end_time),
        "duration": duration,
        "timezone": source.time_zone(),
        "location": location,
        "organizer": contact_ref(&mut source),
        "attendees": attendees,
        "isRecurring": source.boolean(),
        "recurrence": source.maybe(|source| json!({
            "frequency": source.pick(RECURRENCE_FREQUENCIES),
            "until": source::iso_date(source.date_future(365)),
        })),
        "agenda": agenda,
        "notes": source.maybe(|source| Value::from(source.paragraphs(2))),
        "recordingUrl": source.maybe(|source| Value::from(source.url())),
    }))
}

fn job_listing(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let posted_date = source.datetime_recent(30);
    let deadline = source.datetime_between(posted_date, posted_date + Duration::days(30));
    let min_salary = source.int(30_000, 80_000);

    Ok(json!({
        "id": source.uuid(),
        "title": source.job_title(),
        "company": source.company_name(),
        "location": source.city(),
        "description": source.paragraphs(2),
        "requirements": [
            source.sentence(3, 10),
            source.sentence(3, 10),
            source.sentence(3, 10),
        ],
        "salary": {
            "min": min_salary,
            "max": source.int(min_salary + 1000, 200_000),
        },
        "employmentType": source.pick(JOB_EMPLOYMENT_TYPES),
        "postedDate": source::iso_datetime_seconds(posted_date),
        "applicationDeadline": source::iso_datetime_seconds(deadline),
    }))
}
