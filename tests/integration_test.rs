//! Integration tests for ipcalc
//!
//! These tests exercise the complete flow from parsed input to the
//! rendered row set consumed by the terminal output.

use ipcalc::output::{build_rows, NOT_APPLICABLE};
use ipcalc::{Ipv4Address, Ipv4Error, NetworkClass};

fn row_value(address: &str, cidr: Option<u8>, label: &str) -> String {
    let mut ip: Ipv4Address = address.parse().expect("valid address");
    if let Some(len) = cidr {
        ip.set_cidr(len).expect("valid cidr");
    }
    build_rows(&ip, false)
        .into_iter()
        .find(|row| row.label == label)
        .expect("known label")
        .value
}

#[test]
fn test_class_c_report() {
    assert_eq!(row_value("192.168.1.100", Some(24), "Address"), "192.168.1.100");
    assert_eq!(
        row_value("192.168.1.100", Some(24), "Netmask"),
        "255.255.255.0 = 24"
    );
    assert_eq!(row_value("192.168.1.100", Some(24), "Wildcard"), "0.0.0.255");
    assert_eq!(
        row_value("192.168.1.100", Some(24), "Network"),
        "192.168.1.0/24 Class C"
    );
    assert_eq!(
        row_value("192.168.1.100", Some(24), "Broadcast"),
        "192.168.1.255"
    );
    assert_eq!(row_value("192.168.1.100", Some(24), "HostMin"), "192.168.1.1");
    assert_eq!(row_value("192.168.1.100", Some(24), "HostMax"), "192.168.1.254");
    assert_eq!(row_value("192.168.1.100", Some(24), "Hosts/Net"), "254");
}

#[test]
fn test_classful_default_class_a() {
    let ip: Ipv4Address = "10.0.0.1".parse().unwrap();
    assert_eq!(ip.cidr(), Some(8));
    assert_eq!(ip.network_address().unwrap().to_string(), "10.0.0.0");
    assert_eq!(ip.network_class(), Some(NetworkClass::A));
}

#[test]
fn test_point_to_point_report() {
    assert_eq!(row_value("172.16.5.4", Some(31), "Network"), "N/A/31 Class B");
    assert_eq!(row_value("172.16.5.4", Some(31), "Broadcast"), NOT_APPLICABLE);
    assert_eq!(row_value("172.16.5.4", Some(31), "HostMin"), "172.16.5.4");
    assert_eq!(row_value("172.16.5.4", Some(31), "HostMax"), "172.16.5.5");
    assert_eq!(row_value("172.16.5.4", Some(31), "Hosts/Net"), "2");
}

#[test]
fn test_host_route_report() {
    assert_eq!(row_value("8.8.8.8", Some(32), "HostMin"), "8.8.8.8");
    assert_eq!(row_value("8.8.8.8", Some(32), "HostMax"), "8.8.8.8");
    assert_eq!(row_value("8.8.8.8", Some(32), "Hosts/Net"), "1");
    assert_eq!(row_value("8.8.8.8", Some(32), "Network"), "N/A/32 Class A");
    assert_eq!(row_value("8.8.8.8", Some(32), "Broadcast"), NOT_APPLICABLE);
}

#[test]
fn test_loopback_report() {
    let ip: Ipv4Address = "127.0.0.1".parse().unwrap();
    assert_eq!(ip.network_class(), None);
    assert_eq!(row_value("127.0.0.1", None, "Netmask"), "N/A = N/A");
    assert_eq!(row_value("127.0.0.1", None, "Network"), "N/A/N/A N/A");
    assert_eq!(row_value("127.0.0.1", None, "Hosts/Net"), NOT_APPLICABLE);
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        "999.1.1.1".parse::<Ipv4Address>(),
        Err(Ipv4Error::InvalidAddress("999.1.1.1".to_string()))
    );

    let mut ip: Ipv4Address = "10.0.0.1".parse().unwrap();
    assert_eq!(ip.set_cidr(33), Err(Ipv4Error::InvalidPrefix(33)));
    assert!(matches!(
        ip.set_netmask(&[255, 255, 255]),
        Err(Ipv4Error::InvalidMask(_))
    ));
}

#[test]
fn test_binary_rows_full_flow() {
    let mut ip: Ipv4Address = "192.168.1.100".parse().unwrap();
    ip.set_cidr(24).unwrap();
    let rows = build_rows(&ip, true);

    assert_eq!(rows.len(), 8);
    assert_eq!(
        rows[0].binary.as_deref(),
        Some("11000000.10101000.00000001.01100100")
    );
    assert_eq!(
        rows[4].binary.as_deref(),
        Some("11000000.10101000.00000001.11111111")
    );
    // Hosts/Net never has a binary counterpart, even in binary mode
    assert_eq!(rows[7].label, "Hosts/Net");
    assert_eq!(rows[7].binary, None);
}
