//! Travel and automotive generators.

use chrono::Duration;
use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const ROOM_TYPES: &[&str] = &["Standard", "Deluxe", "Suite", "Penthouse"];
const RELATIONSHIPS: &[&str] = &["Spouse", "Parent", "Sibling", "Friend"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("travel_itinerary", travel_itinerary);
    registry.insert("vehicle", vehicle);
}

fn travel_itinerary(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let departure = source.datetime_soon(365);
    let trip_days = source.int(3, 14);
    let return_datetime = departure + Duration::days(trip_days);
    let departure_day = departure + Duration::days(1);

    Ok(json!({
        "travelerName": source.full_name(),
        "destination": source.country(),
        "departureDate": source::iso_date(departure.date()),
        "returnDate": source::iso_date(return_datetime.date()),
        "flightDetails": {
            "airline": source.airline(),
            "flightNumber": source.flight_number(),
            "departureTime": source::iso_datetime_seconds(
                source.datetime_between(departure, departure_day),
            ),
            "arrivalTime": source::iso_datetime_seconds(
                source.datetime_between(departure, departure_day),
            ),
        },
        "hotelReservation": {
            "hotelName": format!("{} Hotel", source.company_name()),
            "checkIn": source::iso_date(departure.date()),
            "checkOut": source::iso_date(return_datetime.date()),
            "roomType": source.pick(ROOM_TYPES),
        },
        "carRental": {
            "company": source.company_name(),
            "carModel": source.vehicle_model(),
            "pickupLocation": format!("{} Airport", source.city()),
        },
        "plannedActivities": [
            source.sentence(3, 10),
            source.sentence(3, 10),
            source.sentence(3, 10),
        ],
        "travelInsurance": {
            "provider": source.company_name(),
            "policyNumber": source.account_number(8),
        },
        "passportNumber": source.alphanumeric_upper(9),
        "emergencyContact": {
            "name": source.full_name(),
            "phone": source.phone_number(),
            "relationship": source.pick(RELATIONSHIPS),
        },
    }))
}

fn vehicle(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "make": source.vehicle_manufacturer(),
        "model": source.vehicle_model(),
        "type": source.vehicle_type(),
        "color": source.color_name(),
        "fuelType": source.vehicle_fuel(),
        "year": source.year_past(20),
        "mileage": source.int(0, 200_000),
        "price": source.int(1000, 100_000),
        "vin": source.vin(),
        "licensePlate": source.license_plate(),
    }))
}
