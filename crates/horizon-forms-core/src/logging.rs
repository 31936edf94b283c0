//! Logging targets for horizon-forms.
//!
//! The library emits `tracing` events but never installs a subscriber. To see
//! them, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_forms=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Generic control state (disabling, errors, attributes).
    pub const CONTROL: &str = "horizon_forms::control";
    /// Choice controls: selection changes and submitted data.
    pub const CHOICE: &str = "horizon_forms::choice";
    /// Select box rendering and self-checks.
    pub const SELECT_BOX: &str = "horizon_forms::select_box";
    /// Validation rules.
    pub const RULES: &str = "horizon_forms::rules";
    /// Control groups.
    pub const GROUP: &str = "horizon_forms::group";
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_forms::signal";
}
