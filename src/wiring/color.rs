//! Wire colour overrides by pin name.

use crate::types::Connection;
use std::collections::HashMap;

/// Look up a user-configured colour for `connection`.
///
/// An exact pin-name match on either end wins. Otherwise common signal names
/// are matched loosely: `VCC` also covers `5V` and `3.3V` on the from-pin,
/// then `GND`, `SDA` and `SCL` in that order.
pub fn resolve_wire_color<'a>(
    connection: &Connection,
    overrides: &'a HashMap<String, String>,
) -> Option<&'a str> {
    if overrides.is_empty() {
        return None;
    }

    if let Some(color) = overrides
        .get(&connection.from_pin)
        .or_else(|| overrides.get(&connection.to_pin))
    {
        return Some(color.as_str());
    }

    let from = connection.from_pin.to_uppercase();
    let to = connection.to_pin.to_uppercase();

    let fuzzy: [(&str, bool); 4] = [
        (
            "VCC",
            from.contains("VCC") || from.contains("5V") || from.contains("3.3V") || to.contains("VCC"),
        ),
        ("GND", from.contains("GND") || to.contains("GND")),
        ("SDA", from.contains("SDA") || to.contains("SDA")),
        ("SCL", from.contains("SCL") || to.contains("SCL")),
    ];

    fuzzy
        .into_iter()
        .filter(|(_, matched)| *matched)
        .find_map(|(name, _)| overrides.get(name))
        .map(String::as_str)
}
