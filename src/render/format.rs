// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const GITHUB_BASE_URL: &str = "https://github.com/";

/// Formats an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn format_count(value: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(value);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Scores are always shown with exactly two decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// `month/day/year` of `raw` in the viewer's local time zone, or `raw` itself if unparsable.
pub fn format_generated_at(raw: &str) -> String {
    format_generated_at_in(raw, &Local)
}

pub fn format_generated_at_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_timestamp(raw, tz) {
        Some(at) => format!("{}/{}/{}", at.month(), at.day(), at.year()),
        None => raw.to_owned(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(tz));
    }

    // Date-time without an offset is wall-clock time in the viewer's zone.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // A bare date means midnight UTC.
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
        {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// GitHub link for an `owner/name` identifier.
///
/// The whole identifier is percent-encoded, then only the first encoded `/` becomes a literal
/// separator again, so any later slashes stay encoded.
pub fn repo_url(repo: &str) -> String {
    let encoded = encode_uri_component(repo).replacen("%2F", "/", 1);
    format!("{GITHUB_BASE_URL}{encoded}")
}
