//! Janet source output for card data
//!
//! The layout is fixed: basic properties, movement, attack, abilities,
//! combat stats, then the six event slots, separated by blank lines.

use crate::card::{field, CardData, Event, Value};

/// Janet literal for an empty array
pub const EMPTY_COLLECTION: &str = "@[]";

/// Render card data into output lines.
///
/// The last element is an empty string so that joining with `\n` leaves a
/// trailing newline.
pub fn render_lines(card: &CardData) -> Vec<String> {
    let mut lines = Vec::with_capacity(20);

    lines.push(def(field::COST, &scalar(card, field::COST)));
    lines.push(def(
        field::CARD_IMAGE,
        &format!("\"{}\"", scalar(card, field::CARD_IMAGE)),
    ));
    lines.push(String::new());

    lines.push(def(field::MOVEMENT, &scalar(card, field::MOVEMENT)));
    lines.push(def(
        field::MOVEMENT_POINTS,
        &scalar(card, field::MOVEMENT_POINTS),
    ));
    lines.push(String::new());
    lines.push(def(field::ATTACK, &scalar(card, field::ATTACK)));
    lines.push(String::new());

    lines.push(def(
        field::ABILITIES,
        &abilities(card.get(field::ABILITIES)),
    ));
    lines.push(String::new());

    lines.push(def(
        field::ATTACK_STRENGTH,
        &scalar(card, field::ATTACK_STRENGTH),
    ));
    lines.push(def(field::DEFENSE, &scalar(card, field::DEFENSE)));
    lines.push(String::new());

    for event in Event::ALL {
        lines.push(def(event.key(), &event_handler(card.event(event))));
    }

    lines.push(String::new());
    lines
}

/// Render card data into the file contents
pub fn render(card: &CardData) -> String {
    render_lines(card).join("\n")
}

fn def(name: &str, value: &str) -> String {
    format!("(def {} {})", name, value)
}

/// A missing field interpolates as nothing
fn scalar(card: &CardData, key: &str) -> String {
    card.get(key).map(|v| v.to_string()).unwrap_or_default()
}

fn abilities(value: Option<&Value>) -> String {
    match value {
        Some(Value::List(items)) if !items.is_empty() => {
            let quoted: Vec<String> = items.iter().map(|a| janet_string(a)).collect();
            format!("@[{}]", quoted.join(", "))
        }
        Some(Value::Text(ability)) if !ability.is_empty() => {
            format!("@[{}]", janet_string(ability))
        }
        _ => EMPTY_COLLECTION.to_string(),
    }
}

/// Double-quoted Janet string literal.
///
/// Control characters without a named escape are written byte by byte as `\xHH`.
pub fn janet_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{1b}' => out.push_str("\\e"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\x{:02X}", byte));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Strings are emitted verbatim, lists as a space-joined array of verbatim
/// fragments. Everything else is an empty array.
pub fn event_handler(value: Option<&Value>) -> String {
    match value {
        Some(Value::Text(code)) if !code.is_empty() => code.clone(),
        Some(Value::List(parts)) if !parts.is_empty() => format!("@[{}]", parts.join(" ")),
        _ => EMPTY_COLLECTION.to_string(),
    }
}
