use cloudns_dns01_domain::dns_name::{
    challenge_record_name, is_valid_domain_name, relative_host, zone_candidates,
};
use cloudns_dns01_domain::{Nameserver, ZoneHost};

#[test]
fn test_challenge_record_name() {
    assert_eq!(challenge_record_name("example.com"), "_acme-challenge.example.com");
    assert_eq!(challenge_record_name("*.example.com"), "_acme-challenge.example.com");
    assert_eq!(
        challenge_record_name("sub.example.com."),
        "_acme-challenge.sub.example.com"
    );
}

#[test]
fn test_zone_candidates_most_specific_first() {
    assert_eq!(
        zone_candidates("_acme-challenge.a.b.example.co.uk"),
        vec!["a.b.example.co.uk", "b.example.co.uk", "example.co.uk", "co.uk", "uk"]
    );
}

#[test]
fn test_every_candidate_is_a_proper_suffix() {
    let record_name = "_acme-challenge.sub.example.com";
    for zone in zone_candidates(record_name) {
        let host = relative_host(record_name, &zone).unwrap();
        assert_eq!(format!("{host}.{zone}"), record_name);
    }
}

#[test]
fn test_domain_name_validation() {
    assert!(is_valid_domain_name("example.com"));
    assert!(is_valid_domain_name("xn--bcher-kva.example"));
    assert!(is_valid_domain_name("com"));
    assert!(!is_valid_domain_name("_acme-challenge.example.com"));
    assert!(!is_valid_domain_name("-bad.example.com"));
    assert!(!is_valid_domain_name("bad-.example.com"));
    assert!(!is_valid_domain_name("double..dot.com"));
    assert!(!is_valid_domain_name(""));
    assert!(!is_valid_domain_name(&format!("{}.com", "a".repeat(64))));
}

#[test]
fn test_zone_host_fqdn() {
    let zone_host = ZoneHost::new("example.com.", "_acme-challenge");
    assert_eq!(zone_host.zone, "example.com");
    assert_eq!(zone_host.fqdn(), "_acme-challenge.example.com");
}

#[test]
fn test_nameserver_parsing() {
    let ns: Nameserver = "1.1.1.1".parse().unwrap();
    assert_eq!(ns.socket_addr().port(), 53);
    assert_eq!(ns.to_string(), "1.1.1.1");

    let ns: Nameserver = "9.9.9.9:5353".parse().unwrap();
    assert_eq!(ns.socket_addr().port(), 5353);
    assert_eq!(ns.to_string(), "9.9.9.9:5353");

    let ns: Nameserver = "2606:4700:4700::1111".parse().unwrap();
    assert!(ns.socket_addr().is_ipv6());

    assert!("dns.google".parse::<Nameserver>().is_err());
}
