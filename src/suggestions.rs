//! Pure synthesis of staff-facing guidance from a completed analysis.
//!
//! No I/O and no failure modes: every lookup is total over its closed
//! enum, so [`synthesize`] always produces a full `Suggestions` value.

use crate::types::{
    Detection, Expression, Gender, StyleCategory, StyleClassification, Suggestions,
};

/// Map a completed analysis to approach, demographic, and product guidance.
pub fn synthesize(detection: &Detection, classification: &StyleClassification) -> Suggestions {
    let style_profile = classification.top_style();
    let occasion = classification.top_occasion();
    let product_suggestions = style_profile
        .map(|s| {
            products_for(s.label)
                .iter()
                .map(|p| p.to_string())
                .collect()
        })
        .unwrap_or_default();

    let (expression, _) = detection.dominant_expression();

    Suggestions {
        style_profile,
        occasion,
        product_suggestions,
        approach_tip: approach_tip(expression).to_string(),
        demographic_hint: demographic_hint(detection.age, detection.gender),
    }
}

/// Approach guidance keyed by the dominant expression.
pub fn approach_tip(expression: Expression) -> &'static str {
    match expression {
        Expression::Happy => {
            "Customer seems in a good mood — great time to suggest new arrivals or promotions."
        }
        Expression::Surprised => {
            "Something caught their eye — approach to offer more info on what they noticed."
        }
        Expression::Sad => {
            "Customer may appreciate a warm, gentle approach — offer assistance without pressure."
        }
        Expression::Fearful => {
            "Customer seems uncertain — a friendly greeting and guided help could go a long way."
        }
        Expression::Disgusted => "Give some space, check in only if they seem to need help.",
        Expression::Angry => {
            "Give space and avoid being pushy — check in briefly only if they look for help."
        }
        Expression::Neutral => {
            "Customer is browsing calmly — let them explore, offer help if they pause."
        }
    }
}

/// Demographic framing by age bracket and gender label.
pub fn demographic_hint(age: u32, gender: Gender) -> String {
    let label = gender.display_name();
    if age < 20 {
        format!("{label}, ~{age} years — likely drawn to trend-driven and youthful styles.")
    } else if age < 30 {
        format!("{label}, ~{age} years — likely interested in current trends and versatile pieces.")
    } else if age < 40 {
        format!(
            "{label}, ~{age} years — may value quality, fit, and style that transitions from casual to professional."
        )
    } else if age < 55 {
        format!("{label}, ~{age} years — likely prefers classic, professional, or refined casual styles.")
    } else {
        format!("{label}, ~{age} years — may appreciate comfort, timeless classics, and quality fabrics.")
    }
}

/// Product groups worth showing for a style profile.
pub fn products_for(style: StyleCategory) -> &'static [&'static str] {
    match style {
        StyleCategory::CasualStreetwear => {
            &["T-shirts", "Hoodies", "Sneakers", "Jeans", "Caps"]
        }
        StyleCategory::FormalBusiness => {
            &["Blazers", "Dress Shirts", "Chinos", "Dress Shoes", "Ties"]
        }
        StyleCategory::SportyAthletic => &[
            "Activewear",
            "Running Shoes",
            "Track Pants",
            "Sports Bras",
            "Gym Bags",
        ],
        StyleCategory::TrendyFashionForward => &[
            "Statement Pieces",
            "Accessories",
            "Trending Brands",
            "Limited Editions",
        ],
        StyleCategory::ClassicMinimalist => &[
            "Basics",
            "Neutral Tones",
            "Quality Essentials",
            "Timeless Cuts",
        ],
        StyleCategory::BohemianArtistic => &[
            "Flowy Dresses",
            "Prints",
            "Layered Pieces",
            "Handmade Accessories",
        ],
        StyleCategory::LuxuryDesigner => &[
            "Premium Collections",
            "Designer Brands",
            "Accessories",
            "Exclusive Items",
        ],
        StyleCategory::OutdoorRugged => {
            &["Jackets", "Hiking Boots", "Cargo Pants", "Weatherproof Gear"]
        }
    }
}
