//! Macro for implementing Display and FromStr for name-tagged enums
//!
//! Settings files and environment variables name services by string; this
//! macro gives a single place for the canonical name of each variant plus any
//! accepted aliases.
//!
//! # Example
//!
//! ```rust
//! use serviceclients_domain::impl_named_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Transport {
//!     Http,
//!     Ssh,
//! }
//!
//! impl_named_enum_conversions!(Transport {
//!     Http => "http" | "https",
//!     Ssh => "ssh",
//! });
//! ```

/// Implements Display and FromStr for enums named by string
///
/// - Display writes the first (canonical) name of the variant
/// - FromStr accepts the canonical name or any alias, case-insensitively
#[macro_export]
macro_rules! impl_named_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => ::std::write!(f, $str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str $(| $alias)* => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Transport {
        Http,
        Ssh,
    }

    impl_named_enum_conversions!(Transport {
        Http => "http" | "https",
        Ssh => "ssh",
    });

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(Transport::Http.to_string(), "http");
        assert_eq!(Transport::Ssh.to_string(), "ssh");
    }

    #[test]
    fn test_fromstr_accepts_aliases_in_any_case() {
        assert_eq!(Transport::from_str("HTTPS").unwrap(), Transport::Http);
        assert_eq!(Transport::from_str("Ssh").unwrap(), Transport::Ssh);
    }

    mod with_local_result_alias {
        #[allow(dead_code)]
        type Result<T> = std::result::Result<T, ()>;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(super) enum Mode {
            Active,
            Passive,
        }

        impl_named_enum_conversions!(Mode {
            Active => "active",
            Passive => "passive" | "pasv",
        });
    }

    #[test]
    fn test_expands_next_to_single_parameter_result_alias() {
        use with_local_result_alias::Mode;
        assert_eq!(Mode::from_str("PASV").unwrap(), Mode::Passive);
        assert_eq!(Mode::Active.to_string(), "active");
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = Transport::from_str("ftp");
        assert!(result.unwrap_err().contains("Invalid Transport: ftp"));
    }
}
