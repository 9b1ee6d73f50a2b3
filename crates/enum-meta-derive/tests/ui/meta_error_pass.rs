use enum_meta_derive::meta_error;
use std::borrow::Cow;

#[meta_error]
pub enum DemoError {
    #[error("Missing entry{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: Result<(), DemoError> = Err("boom".into());
    let err = err.context("startup").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (startup): boom");

    let missing = DemoError::Missing { key: "user".to_owned(), context: None };
    assert_eq!(missing.to_string(), "Missing entry: user");
}
