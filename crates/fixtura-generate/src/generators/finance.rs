//! Finance generators: cards, accounts, loans, policies, subscriptions.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::{GeneratorRegistry, contact_ref};
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const TRANSACTION_TYPES: &[&str] = &["purchase", "refund", "transfer", "withdrawal", "deposit"];
const TRANSACTION_STATUSES: &[&str] = &["pending", "completed", "failed", "cancelled"];
const ACCOUNT_TYPES: &[&str] = &["checking", "savings", "money_market", "cd", "ira"];
const ACCOUNT_STATUSES: &[&str] = &["active", "frozen", "closed", "pending"];
const LOAN_TYPES: &[&str] = &[
    "personal",
    "mortgage",
    "auto",
    "student",
    "business",
    "home_equity",
];
const LOAN_STATUSES: &[&str] = &[
    "pending",
    "approved",
    "active",
    "paid_off",
    "defaulted",
    "cancelled",
];
const LOAN_TERMS: &[i64] = &[12, 24, 36, 48, 60, 120, 180, 240, 360];
const COLLATERAL_TYPES: &[&str] = &["property", "vehicle", "savings", "investment"];
const POLICY_TYPES: &[&str] = &[
    "health",
    "auto",
    "home",
    "life",
    "travel",
    "pet",
    "business",
    "disability",
];
const POLICY_STATUSES: &[&str] = &["active", "expired", "cancelled", "pending", "suspended"];
const PREMIUM_FREQUENCIES: &[&str] = &["monthly", "quarterly", "semi-annually", "annually"];
const BENEFICIARY_RELATIONSHIPS: &[&str] = &["Spouse", "Child", "Parent", "Sibling", "Other"];
const CLAIM_STATUSES: &[&str] = &["pending", "approved", "denied", "paid"];
const PLAN_NAMES: &[&str] = &["Basic", "Standard", "Premium", "Enterprise"];
const BILLING_CYCLES: &[&str] = &["monthly", "quarterly", "yearly"];
const SUBSCRIPTION_STATUSES: &[&str] = &["active", "cancelled", "paused", "expired"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("credit_card", credit_card);
    registry.insert("transaction", transaction);
    registry.insert("bank_account", bank_account);
    registry.insert("loan", loan);
    registry.insert("insurance_policy", insurance_policy);
    registry.insert("subscription", subscription);
}

fn credit_card(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "cardNumber": source.credit_card_number(),
        "cardHolder": source.full_name(),
        "expiryDate": source::iso_date(source.date_future(365)),
        "cvv": source.cvv(),
        "cardType": source.credit_card_issuer(),
        "isDefault": source.boolean(),
    }))
}

fn transaction(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "amount": source.price(1.0, 10_000.0),
        "currency": source.currency_code(),
        "type": source.pick(TRANSACTION_TYPES),
        "status": source.pick(TRANSACTION_STATUSES),
        "date": source.timestamp_recent(30),
        "description": source.transaction_description(),
        "accountNumber": source.account_number(8),
    }))
}

fn bank_account(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "accountNumber": source.account_number(12),
        "routingNumber": source.routing_number(),
        "iban": source.iban(),
        "bic": source.bic(),
        "accountType": source.pick(ACCOUNT_TYPES),
        "accountName": source.account_name(),
        "balance": source.price(0.0, 100_000.0),
        "availableBalance": source.price(0.0, 50_000.0),
        "currency": source.currency_code(),
        "status": source.pick(ACCOUNT_STATUSES),
        "owner": contact_ref(&mut source),
        "bank": {
            "name": format!("{} Bank", source.company_name()),
            "branch": format!("{} Branch", source.city()),
            "address": source.street_address(),
        },
        "openedDate": source::iso_date(source.date_past(3650)),
        "lastActivityDate": source.timestamp_recent(30),
        "interestRate": source.float_step(0.01, 5.0, 0.01),
        "overdraftLimit": source.int(0, 5000),
        "isJointAccount": source.boolean(),
    }))
}

fn loan(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let loan_type = match options.str("type") {
        Some(loan_type) => loan_type.to_string(),
        None => source.pick(LOAN_TYPES),
    };

    Ok(json!({
        "id": source.uuid(),
        "loanNumber": format!("LN-{}", source.numeric_string(10)),
        "type": loan_type,
        "status": source.pick(LOAN_STATUSES),
        "borrower": {
            "id": source.uuid(),
            "name": source.full_name(),
            "email": source.email(),
            "creditScore": source.int(300, 850),
        },
        "principal": source.int(1000, 500_000),
        "interestRate": source.float_step(2.0, 20.0, 0.01),
        "term": source.pick_i64(LOAN_TERMS),
        "monthlyPayment": source.price(100.0, 5000.0),
        "totalInterest": source.price(500.0, 100_000.0),
        "totalPayable": source.price(1500.0, 600_000.0),
        "remainingBalance": source.price(0.0, 500_000.0),
        "currency": source.currency_code(),
        "startDate": source::iso_date(source.date_past(1825)),
        "endDate": source::iso_date(source.date_future(10_950)),
        "nextPaymentDate": source::iso_date(source.date_future(36)),
        "paymentsMade": source.int(0, 360),
        "paymentsRemaining": source.int(0, 360),
        "collateral": source.maybe(|source| json!({
            "type": source.pick(COLLATERAL_TYPES),
            "value": source.int(5000, 1_000_000),
            "description": source.sentence(3, 10),
        })),
        "lender": {
            "name": format!("{} Financial", source.company_name()),
            "contactEmail": source.email(),
        },
    }))
}

fn insurance_policy(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let policy_type = match options.str("type") {
        Some(policy_type) => policy_type.to_string(),
        None => source.pick(POLICY_TYPES),
    };

    let beneficiary_count = source.int(1, 3);
    let mut beneficiaries = Vec::with_capacity(beneficiary_count as usize);
    for _ in 0..beneficiary_count {
        beneficiaries.push(json!({
            "name": source.full_name(),
            "relationship": source.pick(BENEFICIARY_RELATIONSHIPS),
            "percentage": source.int(10, 100),
        }));
    }

    let claim_count = source.int(0, 3);
    let mut claims = Vec::with_capacity(claim_count as usize);
    for _ in 0..claim_count {
        claims.push(json!({
            "id": source.uuid(),
            "date": source::iso_date(source.date_past(365)),
            "amount": source.price(100.0, 50_000.0),
            "status": source.pick(CLAIM_STATUSES),
            "description": source.sentence(3, 10),
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "policyNumber": format!("POL-{}", source.alphanumeric_upper(10)),
        "type": policy_type,
        "status": source.pick(POLICY_STATUSES),
        "policyholder": {
            "id": source.uuid(),
            "name": source.full_name(),
            "email": source.email(),
            "phone": source.phone_number(),
            "dateOfBirth": source::iso_date(source.birthdate()),
        },
        "coverage": {
            "amount": source.int(10_000, 1_000_000),
            "deductible": source.int(250, 5000),
            "currency": source.currency_code(),
        },
        "premium": {
            "amount": source.price(50.0, 1000.0),
            "frequency": source.pick(PREMIUM_FREQUENCIES),
            "nextDueDate": source::iso_date(source.date_future(91)),
        },
        "effectiveDate": source::iso_date(source.date_past(730)),
        "expirationDate": source::iso_date(source.date_future(365)),
        "beneficiaries": beneficiaries,
        "insurer": {
            "name": format!("{} Insurance", source.company_name()),
            "contactNumber": source.phone_number(),
            "claimsEmail": source.email(),
        },
        "claims": claims,
        "autoRenewal": source.boolean(),
    }))
}

fn subscription(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "planName": source.pick(PLAN_NAMES),
        "price": source.price(5.0, 100.0),
        "billingCycle": source.pick(BILLING_CYCLES),
        "status": source.pick(SUBSCRIPTION_STATUSES),
        "startDate": source::iso_date(source.date_past(730)),
        "nextBillingDate": source::iso_date(source.date_future(365)),
        "features": [source.words(3), source.words(3), source.words(3)],
        "autoRenew": source.boolean(),
    }))
}
