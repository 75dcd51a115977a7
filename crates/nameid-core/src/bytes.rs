//! Big-endian serialization between an identifier and its 16-byte form.
//!
//! Bytes 0-7 hold the most-significant 64 bits (byte 0 = bits 120-127 down
//! to byte 7 = bits 64-71), bytes 8-15 the least-significant 64 bits
//! analogously. This is the network order laid out by RFC 4122 and must stay
//! bit-exact: the generator hashes the serialized namespace, so any deviation
//! here changes every derived identifier.

use uuid::Uuid;

/// Serialize an identifier into its 16-byte big-endian form.
pub fn uuid_to_bytes(uuid: &Uuid) -> [u8; 16] {
    let (msb, lsb) = uuid.as_u64_pair();
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&msb.to_be_bytes());
    out[8..].copy_from_slice(&lsb.to_be_bytes());
    out
}

/// Reconstruct an identifier from its 16-byte big-endian form.
///
/// Exact inverse of [`uuid_to_bytes`] for all 128-bit values.
pub fn uuid_from_bytes(bytes: [u8; 16]) -> Uuid {
    let mut msb = [0u8; 8];
    let mut lsb = [0u8; 8];
    msb.copy_from_slice(&bytes[..8]);
    lsb.copy_from_slice(&bytes[8..]);
    Uuid::from_u64_pair(u64::from_be_bytes(msb), u64::from_be_bytes(lsb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dns_namespace_layout() {
        // 6ba7b810-9dad-11d1-80b4-00c04fd430c8
        let dns = Uuid::NAMESPACE_DNS;
        let bytes = uuid_to_bytes(&dns);
        assert_eq!(
            bytes,
            [
                0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, //
                0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
            ]
        );
    }

    #[test]
    fn matches_uuid_crate_byte_order() {
        let u = Uuid::from_u128(0x0123_4567_89ab_cdef_0f1e_2d3c_4b5a_6978);
        assert_eq!(&uuid_to_bytes(&u), u.as_bytes());
    }

    #[test]
    fn extreme_values_round_trip() {
        for u in [Uuid::nil(), Uuid::max()] {
            assert_eq!(uuid_from_bytes(uuid_to_bytes(&u)), u);
        }
    }

    proptest! {
        #[test]
        fn round_trip_identity(value in any::<u128>()) {
            let u = Uuid::from_u128(value);
            prop_assert_eq!(uuid_from_bytes(uuid_to_bytes(&u)), u);
        }

        #[test]
        fn byte_round_trip_identity(bytes in any::<[u8; 16]>()) {
            prop_assert_eq!(uuid_to_bytes(&uuid_from_bytes(bytes)), bytes);
        }
    }
}
