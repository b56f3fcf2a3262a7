//! Maps RGB colors to human-readable yarn color names.
//!
//! Buckets are deliberately skewed toward the warm brown/tan/gold range
//! where dog coat colors cluster. The classifier is total over the RGB
//! cube and never fails; malformed hex strings are handled by
//! [`name_for_hex`], which returns the input unchanged.

use crate::color::Color;

/// Classify a color into a yarn color name bucket.
///
/// Pure and deterministic: brightness and saturation gates first (black,
/// white, the gray ladder), then hue ranges with a brightness-dependent
/// label inside each bucket.
pub fn classify(color: Color) -> &'static str {
    let brightness = color.brightness();
    let saturation = color.saturation();

    if brightness < 30.0 {
        return "Black";
    }
    if brightness > 230.0 && saturation < 0.25 {
        return "White";
    }
    if saturation < 0.12 {
        return if brightness < 80.0 {
            "Charcoal"
        } else if brightness < 140.0 {
            "Gray"
        } else if brightness < 200.0 {
            "Light Gray"
        } else {
            "Off-White"
        };
    }

    let hue = color.hue();
    match hue {
        h if (20.0..50.0).contains(&h) => {
            // The dominant bucket: warm browns through tans and creams.
            if brightness < 90.0 {
                "Dark Brown"
            } else if brightness < 130.0 {
                "Brown"
            } else if brightness < 170.0 {
                "Golden Brown"
            } else if brightness < 210.0 {
                "Tan"
            } else {
                "Cream"
            }
        }
        h if (10.0..20.0).contains(&h) => {
            if brightness < 120.0 { "Rust" } else { "Orange" }
        }
        h if (50.0..70.0).contains(&h) => {
            if brightness < 140.0 { "Olive" } else { "Yellow" }
        }
        h if h < 10.0 || h >= 345.0 => {
            if brightness < 110.0 { "Maroon" } else { "Red" }
        }
        h if (70.0..170.0).contains(&h) => {
            if brightness < 120.0 { "Dark Green" } else { "Green" }
        }
        h if (170.0..260.0).contains(&h) => {
            if brightness < 110.0 { "Navy" } else { "Blue" }
        }
        h if (260.0..300.0).contains(&h) => {
            if brightness < 110.0 { "Plum" } else { "Purple" }
        }
        _ => {
            if brightness < 120.0 { "Magenta" } else { "Pink" }
        }
    }
}

/// Resolve a hex string to a color name.
///
/// Unparseable input is returned verbatim rather than treated as an
/// error; hex validation belongs to the upload boundary, not here.
pub fn name_for_hex(hex: &str) -> String {
    match Color::parse_hex(hex) {
        Ok(color) => classify(color).to_string(),
        Err(_) => hex.to_string(),
    }
}
