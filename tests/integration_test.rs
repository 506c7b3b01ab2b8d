//! Integration tests for ip-address
//!
//! These tests go through the public API only: construction from every
//! input shape, equality, containment and the round-trip properties.

use ip_address::processing::classify::{
    is_address, is_dotted_string, is_integer, is_octet_sequence,
};
use ip_address::{is_recognized, Address, AddressError, AddressInput};
use proptest::prelude::*;

#[test]
fn test_validity() {
    for ip in [
        "tgklmrok",
        "gk95*!)",
        "256.1.9.5",
        "1.2.5.4.",
        "&&&~",
        "1.2.3.555",
        "1.2..5",
    ] {
        assert!(!is_recognized(&ip.into()), "{ip} isn't a valid IP");
        assert!(
            matches!(Address::new(ip), Err(AddressError::InvalidAddress(_))),
            "{ip} isn't a valid IP"
        );
    }

    for ip in [
        "1.2.3.4",
        "0.0.0.0",
        "11.51.15.11",
        "255.255.255.255",
        "17.214.51.99",
    ] {
        assert!(is_recognized(&ip.into()), "{ip} is a valid IP");
        assert!(Address::new(ip).is_ok(), "{ip} is a valid IP");
    }
}

#[test]
fn test_predicates() {
    let addr: AddressInput = Address::new("1.2.3.4").unwrap().into();
    assert!(is_address(&addr));
    assert!(!is_dotted_string(&addr));

    assert!(is_dotted_string(&"1.2.3.4/8".into()));
    assert!(!is_dotted_string(&"1.2.3.4/33".into()));
    assert!(is_octet_sequence(&[1, 2, 3, 4].into()));
    assert!(!is_octet_sequence(&vec![1i64, 2, 3, 4, 5].into()));
    assert!(is_integer(&4_294_967_295u32.into()));
    assert!(!is_integer(&4_294_967_296i64.into()));
}

#[test]
fn test_equality() {
    let equal: Vec<(AddressInput, AddressInput)> = vec![
        ("1.2.3.4".into(), "1.2.3.4/32".into()),
        ("1.2.3.0/24".into(), "1.2.3.4/24".into()),
        ("0.0.0.0/0".into(), "5.1.5.6/0".into()),
        ("0.0.0.0/8".into(), "0.0.0.0/8".into()),
        ("1.2.3.4".into(), 16909060.into()),
        (1291977476.into(), "77.2.3.4".into()),
        ([1, 2, 3, 4].into(), "1.2.3.4".into()),
        ([5, 6, 7, 8].into(), [5, 6, 7, 8].into()),
    ];
    for (a, b) in equal {
        let ip_a = Address::new(a.clone()).unwrap();
        let ip_b = Address::new(b.clone()).unwrap();
        assert_eq!(ip_a, ip_b, "{a} and {b} are equal");
        assert!(ip_a.equals(b), "{a} equals {ip_b}");
    }

    let not_equal: Vec<(AddressInput, AddressInput)> = vec![
        ("0.0.0.0/8".into(), "0.0.0.0".into()),
        ("1.2.3.4".into(), "5.6.7.8".into()),
        (11.into(), 156.into()),
        ([0, 0, 5, 10].into(), 510.into()),
        (19.into(), "2.4.6.8".into()),
        ("1.2.3.0/8".into(), "2.2.3.0/8".into()),
    ];
    for (a, b) in not_equal {
        let ip_a = Address::new(a.clone()).unwrap();
        let ip_b = Address::new(b.clone()).unwrap();
        assert_ne!(ip_a, ip_b, "{a} and {b} are not equal");
        assert!(!ip_a.equals(b));
    }
}

#[test]
fn test_containment() {
    let net = Address::new("10.0.0.0/8").unwrap();
    assert!(net.contains("10.1.2.3").unwrap());
    assert!(net.contains([10, 200, 0, 1]).unwrap());
    assert!(!net.contains("11.0.0.0").unwrap());

    let subnet = (Address::new("10.1.2.3").unwrap() / 16).unwrap();
    assert_eq!(subnet.to_string(), "10.1.0.0/16");
    assert!(net.contains(subnet).unwrap());
    assert!(!subnet.contains(net).unwrap(), "A /16 does not contain its /8");
}

#[test]
fn test_octet_editing() {
    let mut ip = Address::new("12.4.97.0/24").unwrap();
    assert_eq!(ip.octet(2).unwrap(), 97);
    ip.set_octet(3, 8).unwrap();
    assert_eq!(ip.to_string(), "12.4.97.8");
    assert!(ip.set_octet(3, 256).is_err());
    assert!(ip.octet(4).is_err());
}

fn prefix_len() -> impl Strategy<Value = u8> {
    0u8..=32
}

proptest! {
    #[test]
    fn prop_dotted_round_trip(w in 0u8..=255, x in 0u8..=255, y in 0u8..=255, z in 0u8..=255) {
        let s = format!("{w}.{x}.{y}.{z}");
        prop_assert_eq!(Address::new(s.as_str()).unwrap().to_string(), s);
    }

    #[test]
    fn prop_integer_round_trip(k in any::<u32>()) {
        prop_assert_eq!(Address::new(k).unwrap().to_integer(), k);
    }

    #[test]
    fn prop_octets_round_trip(octets in any::<[u8; 4]>()) {
        prop_assert_eq!(Address::new(octets).unwrap().octets(), octets);
    }

    #[test]
    fn prop_masking_idempotent(k in any::<u32>(), n in prefix_len()) {
        let once = Address::new(k).unwrap().with_prefix_length(n).unwrap();
        prop_assert_eq!(once.with_prefix_length(n).unwrap(), once);
    }

    #[test]
    fn prop_contains_reflexive(k in any::<u32>(), n in prefix_len()) {
        let ip = Address::new(k).unwrap().with_prefix_length(n).unwrap();
        prop_assert!(ip.contains(ip).unwrap());
    }

    #[test]
    fn prop_prefix_boundaries(k in any::<u32>()) {
        let ip = Address::new(k).unwrap();
        prop_assert_eq!(ip.with_prefix_length(0).unwrap().to_integer(), 0);
        prop_assert_eq!(ip.with_prefix_length(32).unwrap().to_integer(), k);
    }

    #[test]
    fn prop_network_contains_hosts(k in any::<u32>(), n in prefix_len()) {
        let host = Address::new(k).unwrap();
        let net = host.with_prefix_length(n).unwrap();
        prop_assert!(net.contains(host).unwrap());
    }

    #[test]
    fn prop_classifier_never_panics(s in "\\PC*") {
        let recognized = is_recognized(&s.as_str().into());
        prop_assert_eq!(recognized, Address::new(s.as_str()).is_ok());
    }
}
