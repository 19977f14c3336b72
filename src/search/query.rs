//! Deterministic derivation of the search query string from UI intent.
//!
//! Three mutually-overriding inputs, highest precedence first: explicit free
//! text, a named preset, and a pair of continuous style-axis sliders.

use serde::{Deserialize, Serialize};

/// Named quick-search presets with fixed canonical phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    DateNight,
    OfficeMeeting,
    WeekendCasual,
    Workout,
    Party,
    Travel,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::DateNight,
        Preset::OfficeMeeting,
        Preset::WeekendCasual,
        Preset::Workout,
        Preset::Party,
        Preset::Travel,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::DateNight => "Date Night",
            Preset::OfficeMeeting => "Office Meeting",
            Preset::WeekendCasual => "Weekend Casual",
            Preset::Workout => "Workout",
            Preset::Party => "Party",
            Preset::Travel => "Travel",
        }
    }

    /// Canonical search phrase.
    pub fn query(&self) -> &'static str {
        match self {
            Preset::DateNight => "stylish outfit for a romantic date night out",
            Preset::OfficeMeeting => "professional outfit for a business meeting at the office",
            Preset::WeekendCasual => "comfortable casual outfit for a relaxed weekend",
            Preset::Workout => "athletic sportswear for exercise and gym workout",
            Preset::Party => "bold fashionable outfit for a fun night out party",
            Preset::Travel => "comfortable practical outfit for traveling",
        }
    }
}

/// One continuous style axis with phrases for its extremes.
struct SliderAxis {
    low: &'static str,
    high: &'static str,
}

/// Axes in fixed composition order: formality first, then boldness.
const FORMALITY: SliderAxis = SliderAxis {
    low: "casual relaxed everyday clothing",
    high: "formal professional elegant clothing",
};
const BOLDNESS: SliderAxis = SliderAxis {
    low: "conservative modest simple clothing",
    high: "bold daring fashion-forward statement clothing",
};

/// Slider values inside [35, 65] contribute no modifier.
const NEUTRAL_LOW: u8 = 35;
const NEUTRAL_HIGH: u8 = 65;

/// The current search intent.
///
/// The mutators keep the three inputs mutually overriding: typing clears
/// the preset, touching a slider clears both preset and free text, and
/// re-selecting the active preset toggles it off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    free_text: String,
    active_preset: Option<Preset>,
    /// 0 = fully casual, 100 = fully formal
    formality: u8,
    /// 0 = fully conservative, 100 = fully bold
    boldness: u8,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            active_preset: None,
            formality: 50,
            boldness: 50,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
        self.active_preset = None;
    }

    pub fn toggle_preset(&mut self, preset: Preset) {
        self.active_preset = if self.active_preset == Some(preset) {
            None
        } else {
            Some(preset)
        };
        self.free_text.clear();
    }

    pub fn set_formality(&mut self, value: u8) {
        self.formality = value.min(100);
        self.active_preset = None;
        self.free_text.clear();
    }

    pub fn set_boldness(&mut self, value: u8) {
        self.boldness = value.min(100);
        self.active_preset = None;
        self.free_text.clear();
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn active_preset(&self) -> Option<Preset> {
        self.active_preset
    }
}

/// Derive the query string from the current intent.
///
/// Precedence: non-empty free text (trimmed, verbatim), then the active
/// preset's canonical phrase, then a composite of the customer-style hint
/// and any non-neutral slider modifiers. With no hint and no modifiers the
/// composite collapses to the literal word "clothing".
pub fn build_query(state: &QueryState, customer_style: Option<&str>) -> String {
    let text = state.free_text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    if let Some(preset) = state.active_preset {
        return preset.query().to_string();
    }

    let base = match customer_style {
        Some(style) => format!("{} clothing", style.to_lowercase()),
        None => "clothing".to_string(),
    };

    let mut modifiers = Vec::new();
    for (value, axis) in [(state.formality, &FORMALITY), (state.boldness, &BOLDNESS)] {
        if value < NEUTRAL_LOW {
            modifiers.push(axis.low);
        } else if value > NEUTRAL_HIGH {
            modifiers.push(axis.high);
        }
    }

    if modifiers.is_empty() {
        base
    } else {
        format!("{}, {}", base, modifiers.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_wins_over_preset() {
        let mut state = QueryState::new();
        state.toggle_preset(Preset::DateNight);
        state.free_text = "red shoes".to_string(); // bypass mutator to keep both set
        assert_eq!(build_query(&state, None), "red shoes");
    }

    #[test]
    fn test_free_text_is_trimmed() {
        let mut state = QueryState::new();
        state.set_free_text("  linen shirt  ");
        assert_eq!(build_query(&state, None), "linen shirt");
    }

    #[test]
    fn test_preset_used_when_no_free_text() {
        let mut state = QueryState::new();
        state.toggle_preset(Preset::Workout);
        assert_eq!(
            build_query(&state, None),
            "athletic sportswear for exercise and gym workout"
        );
    }

    #[test]
    fn test_neutral_sliders_yield_bare_base() {
        let mut state = QueryState::new();
        state.set_formality(50);
        state.set_boldness(50);
        assert_eq!(build_query(&state, None), "clothing");
    }

    #[test]
    fn test_low_formality_adds_casual_phrase() {
        let mut state = QueryState::new();
        state.set_formality(20);
        assert_eq!(
            build_query(&state, None),
            "clothing, casual relaxed everyday clothing"
        );
    }

    #[test]
    fn test_band_edges_are_neutral() {
        let mut state = QueryState::new();
        state.set_formality(35);
        state.set_boldness(65);
        assert_eq!(build_query(&state, None), "clothing");
    }

    #[test]
    fn test_both_axes_join_in_fixed_order() {
        let mut state = QueryState::new();
        state.set_formality(80);
        state.set_boldness(10);
        assert_eq!(
            build_query(&state, None),
            "clothing, formal professional elegant clothing, conservative modest simple clothing"
        );
    }

    #[test]
    fn test_customer_style_hint_is_lowercased_base() {
        let state = QueryState::new();
        assert_eq!(
            build_query(&state, Some("Casual / Streetwear")),
            "casual / streetwear clothing"
        );
    }

    #[test]
    fn test_typing_clears_preset() {
        let mut state = QueryState::new();
        state.toggle_preset(Preset::Party);
        state.set_free_text("denim jacket");
        assert_eq!(state.active_preset(), None);
    }

    #[test]
    fn test_slider_clears_preset_and_text() {
        let mut state = QueryState::new();
        state.toggle_preset(Preset::Party);
        state.set_free_text("denim jacket");
        state.set_boldness(90);
        assert_eq!(state.active_preset(), None);
        assert!(state.free_text().is_empty());
        assert_eq!(
            build_query(&state, None),
            "clothing, bold daring fashion-forward statement clothing"
        );
    }

    #[test]
    fn test_reselecting_preset_toggles_off() {
        let mut state = QueryState::new();
        state.toggle_preset(Preset::Travel);
        state.toggle_preset(Preset::Travel);
        assert_eq!(state.active_preset(), None);
    }
}
