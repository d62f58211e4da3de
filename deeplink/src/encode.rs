use crate::types::Deeplink;
use url::form_urlencoded::byte_serialize;

/// Percent-encode a query value the way `application/x-www-form-urlencoded`
/// decoding expects it.
fn encode_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Render a deeplink as an activation URL (`scheme://tag[?key=value]`).
///
/// Resolving the result against the same scheme yields `link` again.
pub fn encode(link: &Deeplink, scheme: &str) -> String {
    let kind = link.kind();
    let mut uri = format!("{}://{}", scheme, kind.tag());

    if let (Some(key), Some(value)) = (kind.required_parameter(), link.value()) {
        uri.push('?');
        uri.push_str(key);
        uri.push('=');
        uri.push_str(&encode_value(value));
    }

    uri
}
