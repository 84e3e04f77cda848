//! Macro for implementing Display and FromStr for tag enums
//!
//! Category tags, wizard step ids and policy names all travel to the UI and
//! the config files as lowercase strings. This macro provides both
//! conversions from one mapping table.
//!
//! # Example
//!
//! ```rust
//! use eventreg_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum RoomState {
//!     Available,
//!     SoldOut,
//! }
//!
//! impl_domain_status_conversions!(RoomState {
//!     Available => "available",
//!     SoldOut => "sold_out",
//! });
//!
//! assert_eq!(RoomState::SoldOut.to_string(), "sold_out");
//! assert_eq!("Available".parse::<RoomState>(), Ok(RoomState::Available));
//! ```

/// Implements Display and FromStr traits for tag enums
///
/// This macro generates:
/// - Display trait: writes the mapped string
/// - FromStr trait: parses case-insensitive, whitespace-trimmed strings
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
