//! Compact timing payload decoding.
//!
//! Each resource's timing data travels as a comma-separated token string.
//! The first token packs the initiator type index (one leading decimal
//! digit) together with the base-36 `startTime`; the remaining tokens are
//! base-36 offsets from `startTime`, stored in reverse chronological order
//! so the usually-unset redirect fields fall off the tail when the encoder
//! trims trailing zeros.
//!
//! Format: `<initiator digit><startTime>,<responseEnd>,...,<redirectStart>`

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::initiator::initiator_type_from_index;

/// Errors that can occur while decoding a compact payload
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Empty compact payload")]
    Empty,

    #[error("Initiator type must be a leading decimal digit, found {0:?}")]
    InvalidInitiator(char),

    #[error("Invalid base-36 token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },
}

/// A fully decoded resource timing record.
///
/// Field names and order match the wire schema consumed downstream, so the
/// serialized JSON is interchangeable with records read straight off the
/// browser's resource timing API. All timestamps are absolute milliseconds
/// on the same time base as `startTime`; 0 means the phase was not
/// measured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTiming {
    pub name: String,
    pub initiator_type: String,
    pub start_time: u64,
    pub redirect_start: u64,
    pub redirect_end: u64,
    pub fetch_start: u64,
    pub domain_lookup_start: u64,
    pub domain_lookup_end: u64,
    pub connect_start: u64,
    pub secure_connection_start: u64,
    pub connect_end: u64,
    pub request_start: u64,
    pub response_start: u64,
    pub response_end: u64,
    pub duration: u64,
}

/// Stored timestamp fields. Token position 0 holds `startTime`; positions
/// 1..=10 hold these fields in order. `fetchStart` and `duration` are
/// derived at decode time, never stored.
#[derive(Debug, Clone, Copy)]
enum TimingField {
    ResponseEnd,
    ResponseStart,
    RequestStart,
    ConnectEnd,
    SecureConnectionStart,
    ConnectStart,
    DomainLookupEnd,
    DomainLookupStart,
    RedirectEnd,
    RedirectStart,
}

/// Token layout after the leading `startTime` slot, reverse chronological.
const TOKEN_FIELDS: &[TimingField] = &[
    TimingField::ResponseEnd,
    TimingField::ResponseStart,
    TimingField::RequestStart,
    TimingField::ConnectEnd,
    TimingField::SecureConnectionStart,
    TimingField::ConnectStart,
    TimingField::DomainLookupEnd,
    TimingField::DomainLookupStart,
    TimingField::RedirectEnd,
    TimingField::RedirectStart,
];

/// Token position of `redirectStart`, the last stored slot.
const REDIRECT_START_POSITION: usize = TOKEN_FIELDS.len();

impl ResourceTiming {
    fn set_field(&mut self, field: TimingField, value: u64) {
        match field {
            TimingField::ResponseEnd => self.response_end = value,
            TimingField::ResponseStart => self.response_start = value,
            TimingField::RequestStart => self.request_start = value,
            TimingField::ConnectEnd => self.connect_end = value,
            TimingField::SecureConnectionStart => self.secure_connection_start = value,
            TimingField::ConnectStart => self.connect_start = value,
            TimingField::DomainLookupEnd => self.domain_lookup_end = value,
            TimingField::DomainLookupStart => self.domain_lookup_start = value,
            TimingField::RedirectEnd => self.redirect_end = value,
            TimingField::RedirectStart => self.redirect_start = value,
        }
    }
}

/// Decode one timestamp slot.
///
/// Returns 0 when `position` is past the end of `values` (the encoder
/// trims trailing zeros) or when the stored value is 0 (phase not
/// measured). Otherwise the stored value is an offset from
/// `reference_time`.
pub fn decode_timestamp(values: &[u64], position: usize, reference_time: u64) -> u64 {
    match values.get(position) {
        Some(&offset) if offset != 0 => offset + reference_time,
        _ => 0,
    }
}

/// Parse one raw token as base-36. Empty tokens stand for trimmed zeros.
fn parse_token(token: &str, position: usize) -> Result<u64, PayloadError> {
    if token.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(token, 36).map_err(|_| PayloadError::InvalidToken {
        token: token.to_string(),
        position,
    })
}

/// Decode a compact payload into a [`ResourceTiming`] record for `name`.
///
/// Short payloads are valid: unsupplied trailing fields stay 0. Decoding
/// fails only on a present token that is not base-36 content, or on a
/// missing or non-digit initiator character.
pub fn decompress_resource(payload: &str, name: &str) -> Result<ResourceTiming, PayloadError> {
    let mut tokens = payload.split(',');
    let first = tokens.next().unwrap_or_default();

    let initiator_digit = first.chars().next().ok_or(PayloadError::Empty)?;
    let initiator_index = initiator_digit
        .to_digit(10)
        .ok_or(PayloadError::InvalidInitiator(initiator_digit))?;

    // Token 0 is the startTime, sharing its slot with the initiator digit.
    let mut values = vec![parse_token(&first[1..], 0)?];
    for (i, token) in tokens.enumerate() {
        values.push(parse_token(token, i + 1)?);
    }
    let start_time = values[0];

    let mut resource = ResourceTiming {
        name: name.to_string(),
        initiator_type: initiator_type_from_index(i64::from(initiator_index)).to_string(),
        start_time,
        ..ResourceTiming::default()
    };

    for (slot, &field) in TOKEN_FIELDS.iter().enumerate() {
        resource.set_field(field, decode_timestamp(&values, slot + 1, start_time));
    }

    // fetchStart falls back to startTime when the redirect slots were trimmed.
    resource.fetch_start = if values.len() < REDIRECT_START_POSITION {
        start_time
    } else {
        resource.redirect_start
    };

    resource.duration = if resource.response_end > 0 {
        resource.response_end - start_time
    } else {
        0
    };

    Ok(resource)
}
