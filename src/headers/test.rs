use crate::headers::{HeaderError, HeaderMap, HeaderName, HeaderValue, standard};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<HeaderName>();
    is_send_sync::<HeaderValue>();
};

fn name(s: &'static str) -> HeaderName {
    HeaderName::from_static(s)
}

fn value(s: &'static str) -> HeaderValue {
    HeaderValue::from_static(s)
}

#[test]
fn header_map() {
    let mut map = HeaderMap::new();

    map.append(name("Content-Type"), value("FOO"));
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key(standard::CONTENT_TYPE));
    assert!(!map.contains_key("accept"));

    map.append(name("accept"), value("BAR"));
    map.append(name("host"), value("example.com"));
    assert_eq!(map.len(), 3);

    // Case-insensitive

    assert_eq!(map.get("CONTENT-TYPE").unwrap(), "FOO");
    assert_eq!(map.get("Host").unwrap(), "example.com");

    // Multi value, last wins

    map.append(name("ACCEPT"), value("BAZ"));

    assert_eq!(map.get("accept").unwrap(), "BAZ");
    let mut all = map.get_all("accept");
    assert_eq!(all.next().unwrap(), "BAR");
    assert_eq!(all.next().unwrap(), "BAZ");
    assert!(all.next().is_none());

    // Insert replace all

    let replaced = map.insert(name("Accept"), value("QUX"));
    assert_eq!(replaced.unwrap(), "BAZ");
    assert_eq!(map.get_all("accept").count(), 1);
    assert_eq!(map.get("accept").unwrap(), "QUX");
    assert_eq!(map.len(), 3);

    // Order is kept

    let names = map.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["Content-Type", "accept", "host"]);

    // Remove

    assert_eq!(map.remove("content-type").unwrap(), "FOO");
    assert!(!map.contains_key("content-type"));
    assert!(map.remove("content-type").is_none());
    assert_eq!(map.len(), 2);

    map.clear();
    assert!(map.is_empty());
    assert!(map.get("accept").is_none());
}

#[test]
fn header_name() {
    assert_eq!(name("user-agent"), standard::USER_AGENT);
    assert_eq!(standard::USER_AGENT, "USER-AGENT");

    assert_eq!(HeaderName::from_bytes(&b""[..]).unwrap_err(), HeaderError::EmptyName);
    assert_eq!(HeaderName::from_bytes(&b"Content Type"[..]).unwrap_err(), HeaderError::InvalidName);
    assert_eq!(HeaderName::from_bytes(&b"Content:Type"[..]).unwrap_err(), HeaderError::InvalidName);
    assert_eq!(HeaderName::from_bytes(vec![b'x'; 2048]).unwrap_err(), HeaderError::NameTooLong);
    assert!(HeaderName::from_bytes(&b"X-Custom"[..]).is_ok());
}

#[test]
fn header_value() {
    assert!(HeaderValue::from_bytes(&b""[..]).is_ok());
    assert!(HeaderValue::from_bytes(&b"gzip, deflate"[..]).is_ok());
    assert!(HeaderValue::from_bytes(&b" leading"[..]).is_err());
    assert!(HeaderValue::from_bytes(&b"trailing\t"[..]).is_err());
    assert!(HeaderValue::from_bytes(&b"line\r\nbreak"[..]).is_err());
    assert!(HeaderValue::from_bytes(&b"nul\0"[..]).is_err());
    assert_eq!(HeaderValue::from_bytes(vec![b'v'; 16 * 1024]).unwrap_err(), HeaderError::ValueTooLong);

    let value = HeaderValue::from_bytes(&b"caf\xC3\xA9"[..]).unwrap();
    assert_eq!(value.try_as_str().unwrap(), "café");
}
