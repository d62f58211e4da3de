/// Result type alias for deeplink operations.
pub type Result<T> = std::result::Result<T, DeeplinkError>;

/// Errors that can occur while resolving a deeplink.
///
/// Every variant renders the user-facing message through `Display`.
/// `NotFound` and `Unexpected` are never produced by the resolver; they are
/// part of the shared vocabulary for code that looks up resources after a
/// link has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeeplinkError {
    #[error(
        "The received scheme (\"{}\") does not match with the one specified.",
        or_undefined(.received)
    )]
    UnknownScheme { received: Option<String> },

    #[error(
        "The received link {}does not match with any of the ones defined in the Deeplink enum.",
        quoted(.received)
    )]
    UnknownDeeplink { received: Option<String> },

    #[error(
        "The received link should have {expecting} query parameters, but {}{received} {} received.",
        only(.expecting, .received),
        was_or_were(.received)
    )]
    ExpectedQueryParameters { expecting: usize, received: usize },

    #[error("The deeplink expects at least a query parameter named \"{expecting}\".")]
    UnknownQueryParameter { expecting: &'static str },

    #[error("The specified item could not be found.")]
    NotFound,

    #[error("An unexpected error occurred. Code: {code}.")]
    Unexpected { code: i64 },

    #[error("The received link could not be parsed: {0}.")]
    Malformed(#[from] url::ParseError),
}

fn or_undefined(received: &Option<String>) -> &str {
    received.as_deref().unwrap_or("undefined")
}

fn quoted(received: &Option<String>) -> String {
    match received {
        Some(value) => format!("(\"{}\") ", value),
        None => String::new(),
    }
}

fn only(expecting: &usize, received: &usize) -> &'static str {
    if expecting > received {
        "only "
    } else {
        ""
    }
}

fn was_or_were(received: &usize) -> &'static str {
    if *received == 1 {
        "was"
    } else {
        "were"
    }
}
