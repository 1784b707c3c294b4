//! Owner classification of reverse DNS names.

use crate::config::{KNOWN_OWNERS, UNKNOWN_OWNER};

/// Guesses which organization operates a host from its reverse DNS name.
///
/// Only `.com` and `.net` names are classified: the last two labels form the
/// registrable zone (`compute-1.amazonaws.com` -> `amazonaws.com`), which is
/// looked up in [`KNOWN_OWNERS`]. Everything else, including names with fewer
/// than two labels, is "Unknown".
///
/// # Examples
///
/// ```
/// use dnsdigger::get_owner;
///
/// assert_eq!(get_owner("yx-in-f26.1e100.net."), "Google LLC");
/// assert_eq!(get_owner("host.example.org"), "Unknown");
/// ```
pub fn get_owner(name: &str) -> &'static str {
    let name = name.strip_suffix('.').unwrap_or(name);
    let mut labels = name.rsplit('.');
    let (Some(tld), Some(sld)) = (labels.next(), labels.next()) else {
        return UNKNOWN_OWNER;
    };
    if tld != "com" && tld != "net" {
        return UNKNOWN_OWNER;
    }

    let zone = format!("{sld}.{tld}");
    KNOWN_OWNERS
        .iter()
        .find(|(known, _)| *known == zone)
        .map(|(_, owner)| *owner)
        .unwrap_or(UNKNOWN_OWNER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_owner_amazon() {
        assert_eq!(
            get_owner("ec2-34-194-118-33.compute-1.amazonaws.com"),
            "Amazon.com, Inc."
        );
    }

    #[test]
    fn test_get_owner_google() {
        assert_eq!(get_owner("yx-in-f26.1e100.net"), "Google LLC");
    }

    #[test]
    fn test_get_owner_godaddy_and_cloudflare() {
        assert_eq!(get_owner("ns11.domaincontrol.com"), "GoDaddy");
        assert_eq!(get_owner("ns1.cloudflare.com."), "CloudFlare");
    }

    #[test]
    fn test_get_owner_trailing_dot() {
        assert_eq!(
            get_owner("ec2-34-194-118-33.compute-1.amazonaws.com."),
            "Amazon.com, Inc."
        );
    }

    #[test]
    fn test_get_owner_other_tld() {
        assert_eq!(get_owner("host.unknownprovider.org"), UNKNOWN_OWNER);
        // Known zone name under a different TLD does not match
        assert_eq!(get_owner("host.amazonaws.org"), UNKNOWN_OWNER);
    }

    #[test]
    fn test_get_owner_unknown_com_zone() {
        assert_eq!(get_owner("mail.example.com"), UNKNOWN_OWNER);
    }

    #[test]
    fn test_get_owner_too_few_labels() {
        assert_eq!(get_owner("singlelabel"), UNKNOWN_OWNER);
        assert_eq!(get_owner("com"), UNKNOWN_OWNER);
        assert_eq!(get_owner(""), UNKNOWN_OWNER);
        assert_eq!(get_owner("."), UNKNOWN_OWNER);
    }

    #[test]
    fn test_get_owner_bare_zone() {
        assert_eq!(get_owner("amazonaws.com"), "Amazon.com, Inc.");
    }

    #[test]
    fn test_get_owner_is_always_a_table_value_or_unknown() {
        let names = [
            "a.b.c.amazonaws.com",
            "x.1e100.net",
            "x.y.z",
            "..",
            "1.2.3.4",
            "UPPER.AMAZONAWS.COM",
        ];
        for name in names {
            let owner = get_owner(name);
            assert!(
                owner == UNKNOWN_OWNER || KNOWN_OWNERS.iter().any(|(_, o)| *o == owner),
                "unexpected owner {owner:?} for {name:?}"
            );
            assert!(!owner.is_empty());
        }
    }
}
