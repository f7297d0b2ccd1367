//! Types representing conversion settings for rescaling a recipe

/// The two ways a rescale ratio can be specified. Exactly one variant is
/// active at a time; which one is selected lives in Settings, outside the
/// core transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionMode {
    Portions {
        orig_portions: f64,
        new_portions: f64,
    },
    Multiplier {
        factor: f64,
    },
}

impl ConversionMode {
    /// The multiplicative factor applied to every parsed quantity.
    pub fn ratio(&self) -> f64 {
        match self {
            ConversionMode::Portions {
                orig_portions,
                new_portions,
            } => new_portions / orig_portions,
            ConversionMode::Multiplier { factor } => *factor,
        }
    }

    /// Whether conversion may run at all. Comparisons with NaN are false, so
    /// unset fields fail this gate without any special casing.
    pub fn is_valid(&self) -> bool {
        match self {
            ConversionMode::Portions {
                orig_portions,
                new_portions,
            } => *orig_portions > 0.0 && *new_portions > 0.0,
            ConversionMode::Multiplier { factor } => *factor > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Portions,
    Multiplier,
}

/// The full set of user-facing conversion settings. An immutable value; all
/// changes go through update(), which returns a new Settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub mode: Mode,
    pub orig_portions: f64,
    pub new_portions: f64,
    pub multiplier: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: Mode::Portions,
            orig_portions: 1.0,
            new_portions: f64::NAN,
            multiplier: f64::NAN,
        }
    }
}

/// Changes a presentation layer can apply to Settings. Selecting a numeric
/// control switches mode; editing one changes its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SelectPortions,
    SelectMultiplier,
    SetOrigPortions(f64),
    SetNewPortions(f64),
    SetMultiplier(f64),
}

/// Apply one event to the settings, returning the resulting value. The input
/// is left untouched.
pub fn update(settings: Settings, event: Event) -> Settings {
    match event {
        Event::SelectPortions => Settings {
            mode: Mode::Portions,
            ..settings
        },
        Event::SelectMultiplier => Settings {
            mode: Mode::Multiplier,
            ..settings
        },
        Event::SetOrigPortions(value) => Settings {
            orig_portions: value,
            ..settings
        },
        Event::SetNewPortions(value) => Settings {
            new_portions: value,
            ..settings
        },
        Event::SetMultiplier(value) => Settings {
            multiplier: value,
            ..settings
        },
    }
}

impl Settings {
    /// Snapshot of the active conversion variant.
    pub fn mode(&self) -> ConversionMode {
        match self.mode {
            Mode::Portions => ConversionMode::Portions {
                orig_portions: self.orig_portions,
                new_portions: self.new_portions,
            },
            Mode::Multiplier => ConversionMode::Multiplier {
                factor: self.multiplier,
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        self.mode()
            .is_valid()
    }
}
