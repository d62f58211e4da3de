use std::fmt;
use std::str::FromStr;

/// The closed set of deeplink destinations, without their payloads.
///
/// `ALL` fixes the order in which hosts are matched against tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeeplinkKind {
    Home,
    OAuth,
    Profile,
}

impl DeeplinkKind {
    pub const ALL: [DeeplinkKind; 3] = [
        DeeplinkKind::Home,
        DeeplinkKind::OAuth,
        DeeplinkKind::Profile,
    ];

    /// The host string that selects this kind.
    pub fn tag(self) -> &'static str {
        match self {
            DeeplinkKind::Home => "home",
            DeeplinkKind::OAuth => "oauth",
            DeeplinkKind::Profile => "profile",
        }
    }

    /// Number of query parameters this kind expects, `None` when it takes none.
    pub fn arity(self) -> Option<usize> {
        match self {
            DeeplinkKind::Home => None,
            DeeplinkKind::OAuth => Some(1),
            DeeplinkKind::Profile => Some(1),
        }
    }

    /// Name of the query parameter carrying the payload.
    pub fn required_parameter(self) -> Option<&'static str> {
        match self {
            DeeplinkKind::Home => None,
            DeeplinkKind::OAuth => Some("code"),
            DeeplinkKind::Profile => Some("id"),
        }
    }

    /// Build the deeplink of this kind from its parameter value.
    ///
    /// Returns `None` when `value` does not fit the kind's arity.
    pub fn with_value(self, value: Option<String>) -> Option<Deeplink> {
        match (self, value) {
            (DeeplinkKind::Home, None) => Some(Deeplink::Home),
            (DeeplinkKind::OAuth, Some(code)) => Some(Deeplink::OAuth { code }),
            (DeeplinkKind::Profile, Some(id)) => Some(Deeplink::Profile { id }),
            _ => None,
        }
    }

    /// Linear scan over `ALL`, first match wins.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl FromStr for DeeplinkKind {
    type Err = crate::error::DeeplinkError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        Self::from_tag(s).ok_or_else(|| crate::error::DeeplinkError::UnknownDeeplink {
            received: Some(s.to_string()),
        })
    }
}

impl fmt::Display for DeeplinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A resolved in-app destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Deeplink {
    Home,
    OAuth { code: String },
    Profile { id: String },
}

impl Deeplink {
    pub fn kind(&self) -> DeeplinkKind {
        match self {
            Deeplink::Home => DeeplinkKind::Home,
            Deeplink::OAuth { .. } => DeeplinkKind::OAuth,
            Deeplink::Profile { .. } => DeeplinkKind::Profile,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// The payload carried by the required query parameter, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Deeplink::Home => None,
            Deeplink::OAuth { code } => Some(code),
            Deeplink::Profile { id } => Some(id),
        }
    }
}

impl fmt::Display for Deeplink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deeplink::Home => write!(f, "home"),
            Deeplink::OAuth { code } => write!(f, "oauth(code: {:?})", code),
            Deeplink::Profile { id } => write!(f, "profile(id: {:?})", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_table() {
        assert_eq!(DeeplinkKind::Home.tag(), "home");
        assert_eq!(DeeplinkKind::Home.arity(), None);
        assert_eq!(DeeplinkKind::Home.required_parameter(), None);

        assert_eq!(DeeplinkKind::OAuth.tag(), "oauth");
        assert_eq!(DeeplinkKind::OAuth.arity(), Some(1));
        assert_eq!(DeeplinkKind::OAuth.required_parameter(), Some("code"));

        assert_eq!(DeeplinkKind::Profile.tag(), "profile");
        assert_eq!(DeeplinkKind::Profile.arity(), Some(1));
        assert_eq!(DeeplinkKind::Profile.required_parameter(), Some("id"));
    }

    #[test]
    fn test_declaration_order() {
        let tags: Vec<_> = DeeplinkKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["home", "oauth", "profile"]);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(DeeplinkKind::from_tag("oauth"), Some(DeeplinkKind::OAuth));
        assert_eq!(DeeplinkKind::from_tag("OAuth"), None);
        assert_eq!(DeeplinkKind::from_tag(""), None);
        assert!("settings".parse::<DeeplinkKind>().is_err());
        assert_eq!("profile".parse::<DeeplinkKind>().unwrap(), DeeplinkKind::Profile);
    }

    #[test]
    fn test_with_value() {
        for kind in DeeplinkKind::ALL {
            let value = kind.arity().map(|_| "v".to_string());
            let link = kind.with_value(value).unwrap();
            assert_eq!(link.kind(), kind);
        }

        assert_eq!(DeeplinkKind::Home.with_value(Some("x".to_string())), None);
        assert_eq!(DeeplinkKind::OAuth.with_value(None), None);
    }

    #[test]
    fn test_deeplink_accessors() {
        let link = Deeplink::OAuth {
            code: "abc123".to_string(),
        };
        assert_eq!(link.kind(), DeeplinkKind::OAuth);
        assert_eq!(link.tag(), "oauth");
        assert_eq!(link.value(), Some("abc123"));
        assert_eq!(Deeplink::Home.value(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Deeplink::Home.to_string(), "home");
        assert_eq!(
            Deeplink::Profile { id: "42".to_string() }.to_string(),
            "profile(id: \"42\")"
        );
    }
}
