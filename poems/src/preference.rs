//! Appearance preference state machine.
//!
//! The stored preference is `light`, `dark` or `system`; the applied
//! appearance is always `light` or `dark`. `system` defers to the
//! environment's own light/dark signal, which is consulted at startup and
//! every time it reports a change.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. The first failed read or write switches the
//! controller to memory-only mode for the rest of the session instead of
//! failing the toggle.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::error::StorageError;

/// What the user asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppearancePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl AppearancePreference {
    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored value; unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Next value in the toggle cycle. `None` stands for an unset or
    /// unrecognized stored value.
    #[must_use]
    pub fn toggled(current: Option<Self>) -> Self {
        match current {
            Some(Self::Light | Self::System) => Self::Dark,
            Some(Self::Dark) | None => Self::Light,
        }
    }
}

/// What is actually rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvedAppearance {
    #[default]
    Light,
    Dark,
}

impl ResolvedAppearance {
    /// Value written to the document's `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the storage cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the storage cannot be written.
    fn store(&self, value: &str) -> Result<(), StorageError>;
}

/// The environment's light/dark signal and the surface appearance is applied to.
pub trait AppearanceEnvironment {
    fn prefers_dark(&self) -> bool;
    fn apply(&self, appearance: ResolvedAppearance);
}

/// Whether preference writes still reach durable storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    Durable,
    MemoryOnly,
}

/// Owns the preference, its persistence, and the applied appearance.
#[derive(Debug)]
pub struct PreferenceController<S, E> {
    store: S,
    environment: E,
    stored: Option<AppearancePreference>,
    resolved: ResolvedAppearance,
    persistence: Persistence,
}

impl<S: PreferenceStore, E: AppearanceEnvironment> PreferenceController<S, E> {
    /// Create a controller; call [`Self::initialize`] before use.
    pub fn new(store: S, environment: E) -> Self {
        Self {
            store,
            environment,
            stored: Some(AppearancePreference::System),
            resolved: ResolvedAppearance::Light,
            persistence: Persistence::Durable,
        }
    }

    /// Read the persisted preference and apply the matching appearance.
    pub fn initialize(&mut self) -> ResolvedAppearance {
        match self.store.load() {
            Ok(Some(raw)) => {
                self.stored = AppearancePreference::parse(&raw);
                if self.stored.is_none() {
                    log::warn!("ignoring unrecognized appearance preference `{raw}`");
                }
            }
            Ok(None) => {
                self.stored = Some(AppearancePreference::System);
                self.persist(AppearancePreference::System);
            }
            Err(err) => {
                log::warn!("{err}; keeping appearance preference in memory");
                self.persistence = Persistence::MemoryOnly;
                self.stored = Some(AppearancePreference::System);
            }
        }
        self.reconcile()
    }

    /// Advance the toggle cycle, persist, and apply.
    pub fn toggle(&mut self) -> ResolvedAppearance {
        let next = AppearancePreference::toggled(self.stored);
        self.stored = Some(next);
        self.persist(next);
        self.reconcile()
    }

    /// React to the environment's light/dark signal changing.
    ///
    /// Only a stored `system` preference follows the environment; an explicit
    /// or unrecognized value is left alone. Returns whether the appearance was
    /// re-applied.
    pub fn on_environment_signal_changed(&mut self) -> bool {
        if self.stored != Some(AppearancePreference::System) {
            return false;
        }
        self.reconcile();
        true
    }

    /// Stored preference; `None` when storage held an unrecognized value.
    pub fn stored(&self) -> Option<AppearancePreference> {
        self.stored
    }

    /// Preference the appearance is derived from.
    pub fn effective(&self) -> AppearancePreference {
        self.stored.unwrap_or_default()
    }

    pub fn resolved(&self) -> ResolvedAppearance {
        self.resolved
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Resolve from the current preference and apply. Used at startup, after
    /// toggles, and on environment changes.
    fn reconcile(&mut self) -> ResolvedAppearance {
        self.resolved = match self.effective() {
            AppearancePreference::Light => ResolvedAppearance::Light,
            AppearancePreference::Dark => ResolvedAppearance::Dark,
            AppearancePreference::System => {
                if self.environment.prefers_dark() {
                    ResolvedAppearance::Dark
                } else {
                    ResolvedAppearance::Light
                }
            }
        };
        self.environment.apply(self.resolved);
        self.resolved
    }

    fn persist(&mut self, value: AppearancePreference) {
        if self.persistence == Persistence::MemoryOnly {
            return;
        }
        if let Err(err) = self.store.store(value.as_str()) {
            log::warn!("{err}; keeping appearance preference in memory");
            self.persistence = Persistence::MemoryOnly;
        }
    }
}
