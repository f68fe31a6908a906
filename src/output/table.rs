//! Row building for the calculator output.
//!
//! This is the boundary where absent model values become the `N/A`
//! display sentinel; the model itself only speaks `Option`.

use crate::models::{dotted, to_binary, Ipv4Address};

/// Display sentinel for absent derived fields.
pub const NOT_APPLICABLE: &str = "N/A";

/// One output row: label, value and (in binary mode) the value rendered
/// as four 8-bit binary groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpRow {
    pub label: &'static str,
    pub value: String,
    pub binary: Option<String>,
}

/// Build the fixed-order report rows for an address.
///
/// Order: Address, Netmask (`mask = cidr`), Wildcard, Network
/// (`net/cidr Class X`), Broadcast, HostMin, HostMax, Hosts/Net. The
/// Hosts/Net row never carries a binary column.
pub fn build_rows(ip: &Ipv4Address, with_binary: bool) -> Vec<IpRow> {
    let cidr = match ip.cidr() {
        Some(len) => len.to_string(),
        None => NOT_APPLICABLE.to_string(),
    };
    let netmask = fmt_bytes(ip.netmask());
    let wildcard = fmt_bytes(ip.wildcard_mask());
    let network = fmt_addr(ip.network_address());
    let class = match ip.network_class() {
        Some(class) => format!("Class {class}"),
        None => NOT_APPLICABLE.to_string(),
    };
    let broadcast = fmt_addr(ip.broadcast_address());
    let first_host = fmt_addr(ip.first_host());
    let last_host = fmt_addr(ip.last_host());
    let hosts = match ip.hosts_in_network() {
        Some(count) => count.to_string(),
        None => NOT_APPLICABLE.to_string(),
    };

    let bin = |s: Option<String>| if with_binary { Some(s.unwrap_or_else(|| NOT_APPLICABLE.to_string())) } else { None };

    vec![
        IpRow {
            label: "Address",
            value: ip.to_string(),
            binary: bin(Some(ip.to_binary())),
        },
        IpRow {
            label: "Netmask",
            value: format!("{netmask} = {cidr}"),
            binary: bin(ip.netmask().map(to_binary)),
        },
        IpRow {
            label: "Wildcard",
            value: wildcard,
            binary: bin(ip.wildcard_mask().map(to_binary)),
        },
        IpRow {
            label: "Network",
            value: format!("{network}/{cidr} {class}"),
            binary: bin(ip.network_address().map(|a| a.to_binary())),
        },
        IpRow {
            label: "Broadcast",
            value: broadcast,
            binary: bin(ip.broadcast_address().map(|a| a.to_binary())),
        },
        IpRow {
            label: "HostMin",
            value: first_host,
            binary: bin(ip.first_host().map(|a| a.to_binary())),
        },
        IpRow {
            label: "HostMax",
            value: last_host,
            binary: bin(ip.last_host().map(|a| a.to_binary())),
        },
        IpRow {
            label: "Hosts/Net",
            value: hosts,
            binary: None,
        },
    ]
}

fn fmt_bytes(bytes: Option<[u8; 4]>) -> String {
    match bytes {
        Some(b) => dotted(b),
        None => NOT_APPLICABLE.to_string(),
    }
}

fn fmt_addr(addr: Option<Ipv4Address>) -> String {
    match addr {
        Some(a) => a.to_string(),
        None => NOT_APPLICABLE.to_string(),
    }
}
