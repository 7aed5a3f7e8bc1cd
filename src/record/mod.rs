//! Decoding kernel ABI records from raw tracee bytes.
//!
//! Each record type has an explicit [`Shape`]: its size and the byte layout of the fields
//! a human cares about. Padding and reserved fields are simply not declared.

pub mod shapes;

use crate::arg::{Arg, Object, ScalarKind, Value};

/// The byte layout of a fixed-size kernel record.
#[derive(Debug)]
pub struct Shape {
    pub name: &'static str,

    /// Size of the record as laid out by the kernel ABI, in bytes.
    pub size: usize,

    pub fields: &'static [Field],
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,

    /// 16 bits in network byte order, e.g. a port number.
    Be16,
}

impl Width {
    pub fn bytes(self) -> usize {
        match self {
            Width::W8 => 1,
            Width::W16 | Width::Be16 => 2,
            Width::W32 => 4,
            Width::W64 => 8,
        }
    }
}

#[derive(Debug)]
pub enum FieldKind {
    Scalar(Width, ScalarKind),

    /// Raw bytes of fixed length.
    Bytes(usize),

    /// A fixed-length `char` array holding a NUL-terminated string.
    Text(usize),

    Record(&'static Shape),

    /// A fixed number of consecutive elements.
    Array(&'static FieldKind, usize),
}

impl FieldKind {
    pub fn size(&self) -> usize {
        match self {
            FieldKind::Scalar(width, _) => width.bytes(),
            FieldKind::Bytes(len) | FieldKind::Text(len) => *len,
            FieldKind::Record(shape) => shape.size,
            FieldKind::Array(elem, count) => elem.size() * count,
        }
    }
}

// Signed kinds are sign-extended from their field width into the raw word.
fn is_signed(kind: ScalarKind) -> bool {
    matches!(kind, ScalarKind::Int | ScalarKind::Long | ScalarKind::ErrorCode)
}

/// Decode `bytes` as a record of shape `shape`.
///
/// Input shorter than `shape.size` is zero-filled, and excess input is ignored, so a
/// length mismatch never faults.
pub fn decode(bytes: &[u8], shape: &Shape) -> Object {
    let mut buf = bytes[..bytes.len().min(shape.size)].to_vec();
    buf.resize(shape.size, 0);

    let fields = shape.fields
        .iter()
        .map(|field| decode_field(field.name, &buf[field.offset..], &field.kind))
        .collect();

    Object::new(shape.name, fields)
}

/// Decode `count` consecutive records of shape `shape`.
///
/// Stops early if `bytes` runs out, but a trailing partial record is zero-filled.
pub fn decode_array(bytes: &[u8], shape: &Shape, count: usize) -> Vec<Object> {
    bytes
        .chunks(shape.size)
        .take(count)
        .map(|chunk| decode(chunk, shape))
        .collect()
}

fn decode_field(name: &'static str, bytes: &[u8], kind: &FieldKind) -> Arg {
    match kind {
        FieldKind::Scalar(width, kind) => {
            let raw = decode_scalar(bytes, *width, *kind);
            Arg::scalar(name, raw, *kind)
        },
        FieldKind::Bytes(len) => {
            Arg::bytes(name, 0, &bytes[..*len])
        },
        FieldKind::Text(len) => {
            let text = &bytes[..*len];
            let end = text.iter().position(|b| *b == 0).unwrap_or(*len);
            Arg::bytes(name, 0, &text[..end])
        },
        FieldKind::Record(shape) => {
            let object = decode(&bytes[..shape.size], shape);
            Arg::object(name, 0, object)
        },
        FieldKind::Array(elem, count) => {
            let stride = elem.size();
            let items = (0..*count)
                .map(|i| decode_field("", &bytes[i * stride..], elem))
                .collect();
            Arg::array(name, 0, items)
        },
    }
}

fn decode_scalar(bytes: &[u8], width: Width, kind: ScalarKind) -> u64 {
    let len = width.bytes();

    let unsigned = match width {
        Width::Be16 => u16::from_be_bytes([bytes[0], bytes[1]]) as u64,
        _ => decode_uint(&bytes[..len]),
    };

    if is_signed(kind) && len < 8 {
        let shift = 64 - 8 * len as u32;
        (((unsigned << shift) as i64) >> shift) as u64
    } else {
        unsigned
    }
}

/// Little-endian unsigned integer from up to 8 bytes. Excess bytes are ignored.
pub fn decode_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .enumerate()
        .fold(0, |acc, (i, b)| acc | (*b as u64) << (8 * i))
}

/// Encode `object` back into the byte layout of `shape`.
///
/// Undeclared bytes (padding, reserved fields) are zero. Fields are matched by position,
/// so `object` must have been built against `shape`.
pub fn encode(object: &Object, shape: &Shape) -> Vec<u8> {
    let mut buf = vec![0; shape.size];

    for (field, arg) in shape.fields.iter().zip(&object.fields) {
        encode_field(arg, &field.kind, &mut buf[field.offset..]);
    }

    buf
}

fn encode_field(arg: &Arg, kind: &FieldKind, out: &mut [u8]) {
    match (kind, arg.value()) {
        (FieldKind::Scalar(Width::Be16, _), _) => {
            out[..2].copy_from_slice(&(arg.raw() as u16).to_be_bytes());
        },
        (FieldKind::Scalar(width, _), _) => {
            let len = width.bytes();
            out[..len].copy_from_slice(&arg.raw().to_le_bytes()[..len]);
        },
        (FieldKind::Bytes(len) | FieldKind::Text(len), Value::Bytes(data)) => {
            let n = data.len().min(*len);
            out[..n].copy_from_slice(&data[..n]);
        },
        (FieldKind::Record(shape), Value::Object(object)) => {
            let bytes = encode(object, shape);
            out[..shape.size].copy_from_slice(&bytes);
        },
        (FieldKind::Array(elem, _), Value::Array(items)) => {
            let stride = elem.size();
            for (i, item) in items.iter().enumerate() {
                encode_field(item, elem, &mut out[i * stride..]);
            }
        },
        _ => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::shapes::*;

    #[test]
    fn test_decode_uint() {
        assert_eq!(decode_uint(&[]), 0);
        assert_eq!(decode_uint(&[0xff]), 0xff);
        assert_eq!(decode_uint(&[0x11, 0xff, 0x00]), 0xff11);
        assert_eq!(decode_uint(&[0xff; 8]), u64::MAX);

        // Overflow ignored.
        assert_eq!(decode_uint(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x1]), u64::MAX);
    }

    #[test]
    fn test_fields_fit_in_shape() {
        for shape in ALL {
            for field in shape.fields {
                assert!(
                    field.offset + field.kind.size() <= shape.size,
                    "{}.{} overruns the record",
                    shape.name,
                    field.name,
                );
            }
        }
    }

    #[test]
    fn test_fields_do_not_overlap() {
        for shape in ALL {
            let mut fields: Vec<_> = shape.fields.iter().collect();
            fields.sort_by_key(|f| f.offset);

            for pair in fields.windows(2) {
                assert!(
                    pair[0].offset + pair[0].kind.size() <= pair[1].offset,
                    "{}.{} overlaps {}",
                    shape.name,
                    pair[0].name,
                    pair[1].name,
                );
            }
        }
    }

    // Deterministic, non-repeating bytes, free of NULs so text fields decode in full.
    fn pattern(len: usize, seed: u8) -> Vec<u8> {
        (0..len)
            .map(|i| ((i as u32 * 37 + seed as u32 * 11) % 251 + 1) as u8)
            .collect()
    }

    #[test]
    fn test_round_trip_all_shapes() {
        for (i, shape) in ALL.iter().enumerate() {
            let x = decode(&pattern(shape.size, i as u8), shape);
            let encoded = encode(&x, shape);

            assert_eq!(encoded.len(), shape.size);
            assert_eq!(decode(&encoded, shape), x, "round trip of {}", shape.name);
        }
    }

    #[test]
    fn test_round_trip_preserves_declared_bytes() {
        let bytes = pattern(TIMESPEC.size, 3);
        let x = decode(&bytes, &TIMESPEC);

        assert_eq!(encode(&x, &TIMESPEC), bytes);
    }

    #[test]
    fn test_short_input_is_zero_filled() {
        let mut bytes = vec![0; 8];
        bytes[..8].copy_from_slice(&7i64.to_le_bytes());

        let ts = decode(&bytes, &TIMESPEC);

        assert_eq!(ts.field("tv_sec").unwrap().raw(), 7);
        assert_eq!(ts.field("tv_nsec").unwrap().raw(), 0);

        let empty = decode(&[], &STAT);
        assert_eq!(empty.fields.len(), STAT.fields.len());
    }

    #[test]
    fn test_long_input_is_truncated() {
        let mut bytes = 42i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0xff; 100]);

        let param = decode(&bytes, &SCHED_PARAM);

        assert_eq!(param.fields.len(), 1);
        assert_eq!(param.field("sched_priority").unwrap().int(), 42);
    }

    #[test]
    fn test_signed_fields_are_sign_extended() {
        let mut bytes = vec![0; POLLFD.size];
        bytes[..4].copy_from_slice(&(-1i32).to_le_bytes());

        let pollfd = decode(&bytes, &POLLFD);
        let fd = pollfd.field("fd").unwrap();

        assert_eq!(fd.raw(), u64::MAX);
        assert_eq!(fd.int(), -1);
    }

    #[test]
    fn test_port_is_network_order() {
        let mut bytes = vec![0; SOCKADDR_IN.size];
        bytes[..2].copy_from_slice(&(libc::AF_INET as u16).to_le_bytes());
        bytes[2..4].copy_from_slice(&8080u16.to_be_bytes());
        bytes[4..8].copy_from_slice(&[127, 0, 0, 1]);

        let addr = decode(&bytes, &SOCKADDR_IN);

        assert_eq!(addr.field("sin_port").unwrap().raw(), 8080);
        assert_eq!(addr.field("sin_addr").unwrap().data(), Some(&[127, 0, 0, 1][..]));
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut bytes = vec![0; UTSNAME.size];
        bytes[..5].copy_from_slice(b"Linux");

        let uts = decode(&bytes, &UTSNAME);

        assert_eq!(uts.field("sysname").unwrap().data(), Some(&b"Linux"[..]));
        assert_eq!(uts.field("release").unwrap().data(), Some(&b""[..]));
    }

    #[test]
    fn test_decode_array() {
        let mut bytes = vec![];
        for (base, len) in [(0x1000u64, 3u64), (0x2000, 5)] {
            bytes.extend_from_slice(&base.to_le_bytes());
            bytes.extend_from_slice(&len.to_le_bytes());
        }

        let iovecs = decode_array(&bytes, &IOVEC, 8);

        assert_eq!(iovecs.len(), 2);
        assert_eq!(iovecs[1].field("iov_base").unwrap().raw(), 0x2000);
        assert_eq!(iovecs[1].field("iov_len").unwrap().raw(), 5);
    }
}
