//! Keyboard control surface for the noise parameters.
//!
//! One parameter is selected at a time; arrow keys step it within its
//! advisory range. This is the only place ranges are enforced.

use winit::keyboard::KeyCode;

use crate::params::{
    NoiseParameters, ParamRange, AMPLITUDE_RANGE, FREQUENCY_RANGE, GAIN_RANGE, OCTAVES_RANGE,
    SEED_RANGE, WIDTH_RANGE,
};

/// Steps applied per key press while Shift is held
const COARSE_STEPS: i32 = 10;

/// An adjustable noise parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Width,
    Seed,
    Amplitude,
    Frequency,
    Octaves,
    Gain,
}

impl ParamField {
    pub const ALL: [ParamField; 6] = [
        ParamField::Width,
        ParamField::Seed,
        ParamField::Amplitude,
        ParamField::Frequency,
        ParamField::Octaves,
        ParamField::Gain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Width => "width",
            ParamField::Seed => "seed",
            ParamField::Amplitude => "amplitude",
            ParamField::Frequency => "frequency",
            ParamField::Octaves => "octaves",
            ParamField::Gain => "gain",
        }
    }

    pub fn range(self) -> ParamRange {
        match self {
            ParamField::Width => WIDTH_RANGE,
            ParamField::Seed => SEED_RANGE,
            ParamField::Amplitude => AMPLITUDE_RANGE,
            ParamField::Frequency => FREQUENCY_RANGE,
            ParamField::Octaves => OCTAVES_RANGE,
            ParamField::Gain => GAIN_RANGE,
        }
    }

    pub fn get(self, params: &NoiseParameters) -> f64 {
        match self {
            ParamField::Width => params.width as f64,
            ParamField::Seed => params.seed as f64,
            ParamField::Amplitude => params.amplitude,
            ParamField::Frequency => params.frequency,
            ParamField::Octaves => params.octaves as f64,
            ParamField::Gain => params.gain,
        }
    }

    /// Store `value`, snapped to the field's step and clamped to its range
    pub fn set(self, params: &mut NoiseParameters, value: f64) {
        let range = self.range();
        let value = range.clamp((value / range.step).round() * range.step);

        match self {
            ParamField::Width => params.width = value as u32,
            ParamField::Seed => params.seed = value as u32,
            ParamField::Amplitude => params.amplitude = value,
            ParamField::Frequency => params.frequency = value,
            ParamField::Octaves => params.octaves = value as u32,
            ParamField::Gain => params.gain = value,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

/// Input actions understood by the control surface and the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    SelectNext,
    SelectPrevious,
    Select(ParamField),
    /// Step the selected parameter (negative = decrease)
    Adjust(i32),
    Reset,
    TogglePolicy,
    Quit,
}

impl ControlAction {
    /// Map a pressed key to an action
    pub fn from_key(key: KeyCode, shift: bool) -> Option<Self> {
        let steps = if shift { COARSE_STEPS } else { 1 };

        let action = match key {
            KeyCode::Tab if shift => ControlAction::SelectPrevious,
            KeyCode::Tab => ControlAction::SelectNext,
            KeyCode::Digit1 => ControlAction::Select(ParamField::Width),
            KeyCode::Digit2 => ControlAction::Select(ParamField::Seed),
            KeyCode::Digit3 => ControlAction::Select(ParamField::Amplitude),
            KeyCode::Digit4 => ControlAction::Select(ParamField::Frequency),
            KeyCode::Digit5 => ControlAction::Select(ParamField::Octaves),
            KeyCode::Digit6 => ControlAction::Select(ParamField::Gain),
            KeyCode::ArrowUp | KeyCode::ArrowRight => ControlAction::Adjust(steps),
            KeyCode::ArrowDown | KeyCode::ArrowLeft => ControlAction::Adjust(-steps),
            KeyCode::KeyR => ControlAction::Reset,
            KeyCode::Space => ControlAction::TogglePolicy,
            KeyCode::Escape => ControlAction::Quit,
            _ => return None,
        };

        Some(action)
    }
}

/// Tracks which parameter the keyboard is editing
#[derive(Debug, Clone)]
pub struct ParamControls {
    selected: ParamField,
}

impl Default for ParamControls {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamControls {
    pub fn new() -> Self {
        Self {
            selected: ParamField::Width,
        }
    }

    pub fn selected(&self) -> ParamField {
        self.selected
    }

    pub fn select(&mut self, field: ParamField) {
        self.selected = field;
    }

    pub fn select_next(&mut self) {
        let next = (self.selected.index() + 1) % ParamField::ALL.len();
        self.selected = ParamField::ALL[next];
    }

    pub fn select_previous(&mut self) {
        let len = ParamField::ALL.len();
        let previous = (self.selected.index() + len - 1) % len;
        self.selected = ParamField::ALL[previous];
    }

    /// Step the selected parameter by `steps` increments
    ///
    /// # Returns
    /// * `true` if the stored value changed
    pub fn adjust(&self, params: &mut NoiseParameters, steps: i32) -> bool {
        let field = self.selected;
        let before = *params;
        let value = field.get(params) + field.range().step * steps as f64;
        field.set(params, value);
        *params != before
    }

    /// Restore every parameter to its default
    pub fn reset(&self, params: &mut NoiseParameters) -> bool {
        let before = *params;
        *params = NoiseParameters::default();
        *params != before
    }

    /// Apply a parameter-related action
    ///
    /// Policy toggling and quit are left to the caller and report no change.
    ///
    /// # Returns
    /// * `true` if `params` changed
    pub fn apply(&mut self, action: ControlAction, params: &mut NoiseParameters) -> bool {
        match action {
            ControlAction::SelectNext => self.select_next(),
            ControlAction::SelectPrevious => self.select_previous(),
            ControlAction::Select(field) => self.select(field),
            ControlAction::Adjust(steps) => return self.adjust(params, steps),
            ControlAction::Reset => return self.reset(params),
            ControlAction::TogglePolicy | ControlAction::Quit => {}
        }
        false
    }

    /// One-line summary of all parameters, selected one bracketed
    pub fn describe(&self, params: &NoiseParameters) -> String {
        ParamField::ALL
            .iter()
            .map(|&field| {
                let value = field.get(params);
                let text = if field.range().step >= 1.0 {
                    format!("{}={}", field.label(), value as u32)
                } else {
                    format!("{}={:.2}", field.label(), value)
                };
                if field == self.selected {
                    format!("[{}]", text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
