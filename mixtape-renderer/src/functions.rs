//! Helper functions callable from every track template.
//!
//! | Name            | Arguments                        | Result                          |
//! |-----------------|----------------------------------|---------------------------------|
//! | `now`           | `use_utc: bool = false`          | RFC 3339 timestamp with offset  |
//! | `uuid`          |                                  | random v4 UUID                  |
//! | `random_ipv4`   | `exclude_reserved: bool = false` | dotted-quad address             |
//! | `random_ipv6`   | `exclude_reserved: bool = false` | eight 4-digit hex groups        |
//! | `random_string` | `length: int = 5`                | lowercase ASCII letters         |
//!
//! Arguments may be passed positionally or by keyword
//! (`random_ipv4(exclude_reserved=true)`). They are type-checked by
//! minijinja: `random_string("x")` or `now(1)` fail the render instead of
//! being coerced.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{Local, SecondsFormat, Utc};
use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};
use rand::Rng;
use uuid::Uuid;

/// Names of every helper registered by [`register`].
pub const HELPER_NAMES: [&str; 5] = ["now", "uuid", "random_ipv4", "random_ipv6", "random_string"];

pub const DEFAULT_STRING_LENGTH: usize = 5;

/// Register all helpers as globals of `env`.
pub fn register(env: &mut Environment<'_>) {
    env.add_function("now", template_now);
    env.add_function("uuid", uuid);
    env.add_function("random_ipv4", template_random_ipv4);
    env.add_function("random_ipv6", template_random_ipv6);
    env.add_function("random_string", template_random_string);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current time as RFC 3339 with microseconds and an explicit offset.
pub fn now(use_utc: bool) -> String {
    if use_utc {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
    } else {
        Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Random IPv4 address; re-sampled while reserved if `exclude_reserved`.
pub fn random_ipv4(exclude_reserved: bool) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let addr = Ipv4Addr::from(rng.gen::<[u8; 4]>());
        if !(exclude_reserved && is_reserved_ipv4(&addr)) {
            return addr.to_string();
        }
    }
}

/// Random IPv6 address as eight uncompressed groups.
pub fn random_ipv6(exclude_reserved: bool) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let groups: [u16; 8] = rng.gen();
        if !(exclude_reserved && is_reserved_ipv6(&Ipv6Addr::from(groups))) {
            return groups
                .iter()
                .map(|g| format!("{g:04x}"))
                .collect::<Vec<_>>()
                .join(":");
        }
    }
}

/// `length` lowercase ASCII letters, drawn uniformly with replacement.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

/// IETF reserved block `240.0.0.0/4`.
pub fn is_reserved_ipv4(addr: &Ipv4Addr) -> bool {
    addr.octets()[0] >= 240
}

/// IETF reserved IPv6 blocks: everything outside global unicast
/// (`2000::/3`), unique local (`fc00::/7`), link and site local
/// (`fe80::/9`) and multicast (`ff00::/8`).
pub fn is_reserved_ipv6(addr: &Ipv6Addr) -> bool {
    let head = addr.segments()[0];
    head < 0x2000 || (0x4000..=0xfbff).contains(&head) || (0xfe00..=0xfe7f).contains(&head)
}

// ---------------------------------------------------------------------------
// Template adapters
// ---------------------------------------------------------------------------

fn flag_arg(positional: Option<bool>, kwargs: &Kwargs, name: &str) -> Result<bool, Error> {
    let keyword: Option<bool> = kwargs.get(name)?;
    if positional.is_some() && keyword.is_some() {
        return Err(Error::new(
            ErrorKind::TooManyArguments,
            format!("`{name}` given both positionally and by keyword"),
        ));
    }
    Ok(positional.or(keyword).unwrap_or(false))
}

fn template_now(use_utc: Option<bool>, kwargs: Kwargs) -> Result<String, Error> {
    let use_utc = flag_arg(use_utc, &kwargs, "use_utc")?;
    kwargs.assert_all_used()?;
    Ok(now(use_utc))
}

fn template_random_ipv4(exclude_reserved: Option<bool>, kwargs: Kwargs) -> Result<String, Error> {
    let exclude = flag_arg(exclude_reserved, &kwargs, "exclude_reserved")?;
    kwargs.assert_all_used()?;
    Ok(random_ipv4(exclude))
}

fn template_random_ipv6(exclude_reserved: Option<bool>, kwargs: Kwargs) -> Result<String, Error> {
    let exclude = flag_arg(exclude_reserved, &kwargs, "exclude_reserved")?;
    kwargs.assert_all_used()?;
    Ok(random_ipv6(exclude))
}

/// Integers only: booleans and floats are rejected even when minijinja
/// could convert them.
fn length_arg(value: Value) -> Result<usize, Error> {
    if value.kind() != ValueKind::Number || !value.is_integer() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("`length` must be an integer, got {}", value.kind()),
        ));
    }
    usize::try_from(value)
}

fn template_random_string(length: Option<Value>, kwargs: Kwargs) -> Result<String, Error> {
    let keyword: Option<Value> = kwargs.get("length")?;
    kwargs.assert_all_used()?;
    let length = match (length, keyword) {
        (Some(_), Some(_)) => {
            return Err(Error::new(
                ErrorKind::TooManyArguments,
                "`length` given both positionally and by keyword",
            ))
        }
        (Some(value), None) | (None, Some(value)) => length_arg(value)?,
        (None, None) => DEFAULT_STRING_LENGTH,
    };
    Ok(random_string(length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_ipv4_boundaries() {
        assert!(!is_reserved_ipv4(&Ipv4Addr::new(239, 255, 255, 255)));
        assert!(is_reserved_ipv4(&Ipv4Addr::new(240, 0, 0, 0)));
        assert!(is_reserved_ipv4(&Ipv4Addr::new(255, 255, 255, 255)));
        assert!(!is_reserved_ipv4(&Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn reserved_ipv6_boundaries() {
        let head = |h: u16| Ipv6Addr::new(h, 0, 0, 0, 0, 0, 0, 1);
        assert!(is_reserved_ipv6(&head(0x0000)));
        assert!(is_reserved_ipv6(&head(0x1fff)));
        assert!(!is_reserved_ipv6(&head(0x2000)));
        assert!(!is_reserved_ipv6(&head(0x3fff)));
        assert!(is_reserved_ipv6(&head(0x4000)));
        assert!(is_reserved_ipv6(&head(0xfbff)));
        assert!(!is_reserved_ipv6(&head(0xfc00)));
        assert!(!is_reserved_ipv6(&head(0xfdff)));
        assert!(is_reserved_ipv6(&head(0xfe00)));
        assert!(is_reserved_ipv6(&head(0xfe7f)));
        assert!(!is_reserved_ipv6(&head(0xfe80)));
        assert!(!is_reserved_ipv6(&head(0xff02)));
    }

    #[test]
    fn random_string_has_requested_length() {
        assert_eq!(random_string(DEFAULT_STRING_LENGTH).len(), 5);
        assert_eq!(random_string(0), "");
    }

    #[test]
    fn length_arg_accepts_integers_only() {
        assert_eq!(length_arg(Value::from(3)).expect("int"), 3);
        assert!(length_arg(Value::from(true)).is_err());
        assert!(length_arg(Value::from(3.0)).is_err());
        assert!(length_arg(Value::from("3")).is_err());
        assert!(length_arg(Value::from(-1)).is_err());
    }

    #[test]
    fn uuid_is_version_4() {
        let parsed = Uuid::parse_str(&uuid()).expect("uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn now_utc_has_zero_offset() {
        assert!(now(true).ends_with("+00:00"));
    }
}
