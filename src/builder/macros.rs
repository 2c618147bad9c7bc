//! Macros for declaring mode enums.

/// Declare an enum of modes with explicit labels and implement `Mode` for it.
///
/// # Example
///
/// ```
/// use visual_mode::mode_enum;
/// use visual_mode::core::Mode;
///
/// mode_enum! {
///     pub enum UploadMode {
///         Idle => "IDLE",
///         Uploading => "UPLOADING",
///         Failed => "FAILED",
///     }
///     error: [Failed]
///     pending: [Uploading]
/// }
///
/// assert_eq!(UploadMode::Uploading.name(), "UPLOADING");
/// assert!(UploadMode::Failed.is_error());
/// ```
#[macro_export]
macro_rules! mode_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
        $(pending: [$($pending:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every mode, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Look a mode up by its label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::Mode for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }

            fn is_pending(&self) -> bool {
                match self {
                    $($(Self::$pending => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Mode::name(self))
            }
        }
    };
}
