//! The `Mode` trait for visual-mode labels.
//!
//! A mode is an opaque label telling the owning view what to display.
//! The stack never interprets modes; it only orders them.

use std::fmt::Debug;

/// Trait for visual-mode labels.
///
/// All methods are pure. Modes are plain values that can be cloned into
/// history records and compared by the caller.
///
/// # Required Traits
///
/// - `Clone`: modes are copied into change records
/// - `PartialEq`: callers compare the current mode to decide what to render
/// - `Debug`: modes show up in diagnostics
///
/// # Example
///
/// ```rust
/// use visual_mode::core::Mode;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum PanelMode {
///     Closed,
///     Loading,
///     Open,
///     Failed,
/// }
///
/// impl Mode for PanelMode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "CLOSED",
///             Self::Loading => "LOADING",
///             Self::Open => "OPEN",
///             Self::Failed => "FAILED",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Failed)
///     }
///
///     fn is_pending(&self) -> bool {
///         matches!(self, Self::Loading)
///     }
/// }
///
/// assert_eq!(PanelMode::Open.name(), "OPEN");
/// assert!(PanelMode::Loading.is_pending());
/// ```
pub trait Mode: Clone + PartialEq + Debug {
    /// Label used for display and logging.
    fn name(&self) -> &str;

    /// Whether this mode reports a failed operation.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }

    /// Whether this mode stands for an operation still in flight.
    ///
    /// Default implementation returns `false`.
    fn is_pending(&self) -> bool {
        false
    }
}

impl Mode for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Mode for &'static str {
    fn name(&self) -> &str {
        self
    }
}
