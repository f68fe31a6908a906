//! Historical (classful) IPv4 addressing.

/// Address class derived from the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    A,
    B,
    C,
    /// Multicast range, no default netmask.
    D,
    /// Reserved range, no default netmask.
    E,
}

impl NetworkClass {
    /// Classify a first octet. `None` for 127 (loopback).
    pub fn of(first_octet: u8) -> Option<NetworkClass> {
        match first_octet {
            0..=126 => Some(NetworkClass::A),
            127 => None,
            128..=191 => Some(NetworkClass::B),
            192..=223 => Some(NetworkClass::C),
            224..=239 => Some(NetworkClass::D),
            240..=255 => Some(NetworkClass::E),
        }
    }

    /// Number of class-defining leading bits (the `0`/`10`/`110`/`1110`
    /// patterns of the classful scheme).
    pub fn leading_bits(&self) -> usize {
        match self {
            NetworkClass::A => 1,
            NetworkClass::B => 2,
            NetworkClass::C => 3,
            NetworkClass::D | NetworkClass::E => 4,
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            NetworkClass::A => 'A',
            NetworkClass::B => 'B',
            NetworkClass::C => 'C',
            NetworkClass::D => 'D',
            NetworkClass::E => 'E',
        };
        write!(f, "{c}")
    }
}

/// Classful default prefix length and netmask for a first octet.
///
/// Loopback (127) and classes D/E have no default; every prefix-derived
/// field is reported as absent for them unless an explicit prefix is set.
pub fn default_netmask(first_octet: u8) -> Option<(u8, [u8; 4])> {
    match first_octet {
        0..=126 => Some((8, [255, 0, 0, 0])),
        127 => None,
        128..=191 => Some((16, [255, 255, 0, 0])),
        192..=223 => Some((24, [255, 255, 255, 0])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries() {
        assert_eq!(NetworkClass::of(0), Some(NetworkClass::A));
        assert_eq!(NetworkClass::of(10), Some(NetworkClass::A));
        assert_eq!(NetworkClass::of(126), Some(NetworkClass::A));
        assert_eq!(NetworkClass::of(127), None);
        assert_eq!(NetworkClass::of(128), Some(NetworkClass::B));
        assert_eq!(NetworkClass::of(191), Some(NetworkClass::B));
        assert_eq!(NetworkClass::of(192), Some(NetworkClass::C));
        assert_eq!(NetworkClass::of(223), Some(NetworkClass::C));
        assert_eq!(NetworkClass::of(224), Some(NetworkClass::D));
        assert_eq!(NetworkClass::of(239), Some(NetworkClass::D));
        assert_eq!(NetworkClass::of(240), Some(NetworkClass::E));
        assert_eq!(NetworkClass::of(255), Some(NetworkClass::E));
    }

    #[test]
    fn test_default_netmask() {
        assert_eq!(default_netmask(10), Some((8, [255, 0, 0, 0])));
        assert_eq!(default_netmask(127), None);
        assert_eq!(default_netmask(172), Some((16, [255, 255, 0, 0])));
        assert_eq!(default_netmask(192), Some((24, [255, 255, 255, 0])));
        assert_eq!(default_netmask(224), None);
        assert_eq!(default_netmask(250), None);
    }

    #[test]
    fn test_leading_bits() {
        assert_eq!(NetworkClass::A.leading_bits(), 1);
        assert_eq!(NetworkClass::B.leading_bits(), 2);
        assert_eq!(NetworkClass::C.leading_bits(), 3);
        assert_eq!(NetworkClass::D.leading_bits(), 4);
        assert_eq!(NetworkClass::E.leading_bits(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(NetworkClass::A.to_string(), "A");
        assert_eq!(NetworkClass::E.to_string(), "E");
    }
}
