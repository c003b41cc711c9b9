//! Conversion surfaces: decimal strings, two's-complement bytes, and
//! native integers.

use integer::{BigInt, BigIntError, Endian, ParseBigIntError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn string_round_trip_across_sizes() {
    let cases = [
        "0",
        "1",
        "-1",
        "9999",
        "10000",
        "10001",
        "65536",
        "4294967296",
        "18446744073709551616",
        "-18446744073709551616",
        "340282366920938463463374607431768211455",
        "10000000000000000000000000000000000000000000000000000000000000001",
    ];
    for s in cases {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn parse_failures_are_typed() {
    assert_eq!("".parse::<BigInt>().unwrap_err(), ParseBigIntError::Empty);
    assert_eq!("-".parse::<BigInt>().unwrap_err(), ParseBigIntError::NoDigits);
    for s in ["1 2", "12.5", "0x10", "--4", "12-"] {
        assert!(s.parse::<BigInt>().is_err(), "{s:?} should not parse");
    }
}

#[test]
fn byte_export_is_minimal_and_signed() {
    assert_eq!(big("255").to_bytes(Endian::Little), vec![0xFF, 0x00]);
    assert_eq!(big("127").to_bytes(Endian::Little), vec![0x7F]);
    assert_eq!(big("128").to_bytes(Endian::Little), vec![0x80, 0x00]);
    assert_eq!(big("-1").to_bytes(Endian::Big), vec![0xFF]);
    assert_eq!(big("-256").to_bytes(Endian::Big), vec![0xFF, 0x00]);
    assert_eq!(big("65535").to_bytes(Endian::Big), vec![0x00, 0xFF, 0xFF]);
}

#[test]
fn byte_round_trip_both_endians() {
    let values = [
        "0",
        "1",
        "-1",
        "127",
        "-128",
        "255",
        "-255",
        "32768",
        "-32768",
        "-32769",
        "123456789123456789123456789123456789",
        "-123456789123456789123456789123456789",
    ];
    for s in values {
        let v = big(s);
        for endian in [Endian::Little, Endian::Big] {
            let bytes = v.to_bytes(endian);
            assert_eq!(BigInt::from_bytes(&bytes, endian), v, "{s} via {endian:?}");
        }
    }
}

#[test]
fn big_endian_is_byte_reversed_little_endian() {
    for s in ["1", "-129", "987654321987654321", "-40000000000"] {
        let v = big(s);
        let mut le = v.to_bytes(Endian::Little);
        le.reverse();
        assert_eq!(le, v.to_bytes(Endian::Big), "{s}");
    }
}

#[test]
fn byte_import_is_total() {
    // every byte pattern decodes to something that re-encodes stably
    for pattern in [
        vec![],
        vec![0x00],
        vec![0x00, 0x00, 0x00],
        vec![0xFF, 0xFF],
        vec![0x80],
        vec![0x00, 0x80],
        vec![0x12, 0x34, 0x56, 0x78, 0x9A],
        vec![0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    ] {
        let v = BigInt::from_bytes(&pattern, Endian::Little);
        let canonical = v.to_bytes(Endian::Little);
        assert_eq!(BigInt::from_bytes(&canonical, Endian::Little), v);
    }
}

#[test]
fn native_conversions() {
    assert_eq!(BigInt::from(42).to_i32(), Ok(42));
    assert_eq!(BigInt::from(-42).to_i64(), Ok(-42));
    assert_eq!(BigInt::from_i64(i64::MIN).to_i64(), Ok(i64::MIN));
    assert_eq!(BigInt::from_i32(i32::MIN).to_i32(), Ok(i32::MIN));
    assert_eq!(big("2147483648").to_i32(), Err(BigIntError::Overflow));
    assert_eq!(big("-2147483649").to_i32(), Err(BigIntError::Overflow));
    assert_eq!(big("-2147483648").to_i32(), Ok(i32::MIN));
    assert_eq!(big("9223372036854775808").to_i64(), Err(BigIntError::Overflow));
    assert_eq!(big("-9223372036854775808").to_i64(), Ok(i64::MIN));
}

#[test]
fn display_and_debug() {
    let v = big("-12345678901234567890");
    assert_eq!(format!("{v}"), "-12345678901234567890");
    assert_eq!(format!("{v:?}"), "BigInt(-12345678901234567890)");
}

#[test]
fn queries_track_the_value() {
    let v = big("65536");
    assert_eq!(v.bit_length(), 17);
    assert_eq!(v.byte_count(), 3);
    assert_eq!(v.signum(), 1);
    assert!(v.is_even());
    assert!(!v.is_zero());
    assert_eq!(v.neg().signum(), -1);
    assert!(big("0").is_even());
}
