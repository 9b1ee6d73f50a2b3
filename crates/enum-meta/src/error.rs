use std::borrow::Cow;

/// Errors returned by the reverse lookups of [`crate::Enum`].
#[enum_meta_derive::meta_error]
#[derive(Clone, PartialEq, Eq)]
pub enum EnumMetaError {
    /// No variant of the enum is declared under the requested name.
    #[error("Unknown variant name{}: `{name}` is not a variant of `{enum_name}`", format_context(.context))]
    UnknownName { enum_name: &'static str, name: String, context: Option<Cow<'static, str>> },

    /// No variant of the enum carries the requested description.
    #[error("Unknown description{}: no variant of `{enum_name}` is described as `{description}`", format_context(.context))]
    UnknownDescription {
        enum_name: &'static str,
        description: String,
        context: Option<Cow<'static, str>>,
    },
}

pub type Result<T, E = EnumMetaError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_when_attached() {
        let err: Result<()> = Err(EnumMetaError::UnknownName {
            enum_name: "Stage",
            name: "Archived".to_owned(),
            context: None,
        });
        assert_eq!(
            err.clone().unwrap_err().to_string(),
            "Unknown variant name: `Archived` is not a variant of `Stage`"
        );

        let err = err.context("loading settings").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown variant name (loading settings): `Archived` is not a variant of `Stage`"
        );
    }
}
