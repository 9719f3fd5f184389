//! How a member value is handed to the property sink.

/// Conversion applied to a member before it is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `XrBool32`: wrapped in `bool(...)`.
    Bool,
    /// 64-bit flags, time, duration and version values. Already a wide
    /// integer on the C++ side.
    Wide,
    /// No sink overload exists; a warning comment is emitted instead.
    Unsupported,
    /// Everything else is passed as-is.
    Passthrough,
}

impl Conversion {
    /// Pick the conversion for a declared member type.
    pub fn for_type(ty: &str) -> Self {
        match ty {
            "XrBool32" => Self::Bool,
            "XrFlags64" | "XrTime" | "XrDuration" | "XrVersion" => Self::Wide,
            "XrUuidEXT" => Self::Unsupported,
            _ => Self::Passthrough,
        }
    }

    /// C++ expression for `access` (e.g. `extProps.isFast`), or `None` if the
    /// member cannot be pushed.
    pub fn apply(self, access: &str) -> Option<String> {
        match self {
            Self::Bool => Some(format!("bool({access})")),
            Self::Wide | Self::Passthrough => Some(access.to_string()),
            Self::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_type() {
        assert_eq!(Conversion::for_type("XrBool32"), Conversion::Bool);
        assert_eq!(Conversion::for_type("XrFlags64"), Conversion::Wide);
        assert_eq!(Conversion::for_type("XrTime"), Conversion::Wide);
        assert_eq!(Conversion::for_type("XrDuration"), Conversion::Wide);
        assert_eq!(Conversion::for_type("XrVersion"), Conversion::Wide);
        assert_eq!(Conversion::for_type("XrUuidEXT"), Conversion::Unsupported);
        assert_eq!(Conversion::for_type("uint32_t"), Conversion::Passthrough);
        assert_eq!(Conversion::for_type("xrbool32"), Conversion::Passthrough);
    }

    #[test]
    fn test_apply() {
        assert_eq!(
            Conversion::Bool.apply("extProps.isFast").as_deref(),
            Some("bool(extProps.isFast)")
        );
        assert_eq!(
            Conversion::Wide.apply("extProps.flags").as_deref(),
            Some("extProps.flags")
        );
        assert_eq!(Conversion::Unsupported.apply("extProps.uuid"), None);
    }
}
