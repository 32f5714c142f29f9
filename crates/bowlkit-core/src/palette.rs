//! Wood palette
//!
//! Maps the segment colours used by the designer to wood species names.
//! Colours are compared as upper-case `#RRGGBB`; `rgb(r, g, b)` strings
//! coming from rendering surfaces are normalised first.

use serde::Serialize;

/// Default segment colour (maple).
pub const DEFAULT_COLOR: &str = "#E2CAA0";

/// Default segment wood.
pub const DEFAULT_WOOD: &str = "maple";

/// Name returned for colours that are not in the palette.
pub const UNKNOWN_WOOD: &str = "unknown";

/// One palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WoodColor {
    /// Hex colour, upper case `#RRGGBB`
    pub hex: &'static str,
    /// Wood species name
    pub wood: &'static str,
}

const WOOD_COLORS: [WoodColor; 20] = [
    WoodColor { hex: "#FDFAF4", wood: "holly" },
    WoodColor { hex: "#E2CAA0", wood: "maple" },
    WoodColor { hex: "#C29A1F", wood: "yellowheart" },
    WoodColor { hex: "#C98753", wood: "red oak" },
    WoodColor { hex: "#AC572F", wood: "mahogany" },
    WoodColor { hex: "#995018", wood: "cherry" },
    WoodColor { hex: "#7B4F34", wood: "walnut" },
    WoodColor { hex: "#6E442E", wood: "sapele" },
    WoodColor { hex: "#623329", wood: "teak" },
    WoodColor { hex: "#51240D", wood: "wenge" },
    WoodColor { hex: "#EFEBE0", wood: "ash" },
    WoodColor { hex: "#EFB973", wood: "birch" },
    WoodColor { hex: "#AD743F", wood: "beech" },
    WoodColor { hex: "#965938", wood: "bubinga" },
    WoodColor { hex: "#884B2F", wood: "bloodwood" },
    WoodColor { hex: "#7C3826", wood: "padauk" },
    WoodColor { hex: "#843E4B", wood: "amaranth" },
    WoodColor { hex: "#582824", wood: "rosewood" },
    WoodColor { hex: "#44252B", wood: "cocobolo" },
    WoodColor { hex: "#342022", wood: "ebony" },
];

/// All palette entries, lightest woods first.
pub fn wood_colors() -> &'static [WoodColor] {
    &WOOD_COLORS
}

/// Normalise a colour to upper-case `#RRGGBB`.
///
/// Hex input is upper-cased; `rgb(r, g, b)` input is converted. Anything
/// else is returned unchanged.
pub fn normalize_color(color: &str) -> String {
    let color = color.trim();
    if color.starts_with('#') {
        return color.to_uppercase();
    }

    let Some(inner) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return color.to_string();
    };

    let channels: Vec<u8> = inner
        .split(',')
        .filter_map(|c| c.trim().parse::<u8>().ok())
        .collect();
    match channels.as_slice() {
        [r, g, b] => format!("#{:02X}{:02X}{:02X}", r, g, b),
        _ => color.to_string(),
    }
}

/// Look up the wood species for a colour, `"unknown"` when unmatched.
pub fn wood_by_color(color: &str) -> &'static str {
    let hex = normalize_color(color);
    match WOOD_COLORS.iter().find(|entry| entry.hex == hex) {
        Some(entry) => entry.wood,
        None => {
            tracing::debug!("No wood match for colour {} ({})", color, hex);
            UNKNOWN_WOOD
        }
    }
}

/// Whether the colour is one of the palette woods.
pub fn is_wood_color(color: &str) -> bool {
    let hex = normalize_color(color);
    WOOD_COLORS.iter().any(|entry| entry.hex == hex)
}

/// Capitalise the first letter of a wood name for display.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
