//! Healthcare and education generators.

use chrono::Datelike;
use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
const DEGREES: &[&str] = &[
    "Bachelor",
    "Master",
    "PhD",
    "Associate",
    "Diploma",
    "Certificate",
];
const HONORS: &[&str] = &["Cum Laude", "Magna Cum Laude", "Summa Cum Laude"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("medical_record", medical_record);
    registry.insert("education", education);
}

fn medical_record(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "patientId": source.uuid(),
        "name": source.full_name(),
        "dateOfBirth": source::iso_date(source.birthdate()),
        "gender": source.sex(),
        "bloodType": source.pick(BLOOD_TYPES),
        "height": source.int(150, 200),
        "weight": source.int(40, 150),
        "allergies": [source.chemical_element(), source.chemical_element()],
        "medications": [source.product_name(), source.product_name()],
        "diagnoses": [source.words(3), source.words(3)],
        "treatmentHistory": source.paragraph(),
        "upcomingAppointments": source::iso_date(source.date_future(365)),
        "primaryCarePhysician": source.full_name(),
    }))
}

fn education(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let start_date = source.date_past(2190);
    let end_date = source.date_between(start_date, source.base_date());

    Ok(json!({
        "id": source.uuid(),
        "degree": source.pick(DEGREES),
        "fieldOfStudy": source.job_area(),
        "university": format!("{} University", source.company_name()),
        "graduationYear": end_date.year(),
        "gpa": source.float_step(2.0, 4.0, 0.1),
        "honors": source.maybe(|source| Value::from(source.pick(HONORS))),
        "activities": [source.words(3), source.words(3)],
        "startDate": source::iso_date(start_date),
        "endDate": source::iso_date(end_date),
    }))
}
