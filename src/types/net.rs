use std::net::{Ipv4Addr, Ipv6Addr};

use crate::annotate;
use crate::arg::{Arg, Object};
use crate::error::Result;
use crate::memory::Memory;
use crate::record::{self, shapes::*, Shape};

use super::{Input, MAX_ITEMS};

/// Largest socket address we decode, `sizeof(struct sockaddr_storage)`.
const SOCKADDR_STORAGE: usize = 128;

/// Bytes of each iovec's buffer included in the decoded value.
const IOV_PREVIEW: usize = 4096;

pub(super) fn sockaddr(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let len = input
        .extent
        .known()
        .unwrap_or(SOCKADDR.size)
        .min(SOCKADDR_STORAGE);

    let bytes = mem.read(input.raw, len)?;

    Ok(Arg::object(input.name, input.raw, decode_sockaddr(&bytes)))
}

/// Decode a socket address by its leading family.
pub(crate) fn decode_sockaddr(bytes: &[u8]) -> Object {
    let family = match bytes {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]) as i32,
        _ => libc::AF_UNSPEC,
    };

    let shape: &Shape = match family {
        libc::AF_INET => &SOCKADDR_IN,
        libc::AF_INET6 => &SOCKADDR_IN6,
        libc::AF_UNIX => &SOCKADDR_UN,
        libc::AF_NETLINK => &SOCKADDR_NL,
        _ => &SOCKADDR,
    };

    let mut object = record::decode(bytes, shape);

    if let Some(field) = object.fields.first_mut() {
        if let Some(name) = annotate::address_family(field.raw()) {
            field.set_annotation(name, true);
        }
    }

    if let Some(addr) = object.field_mut("sin_addr") {
        if let Some(&[a, b, c, d]) = addr.data() {
            let text = Ipv4Addr::new(a, b, c, d).to_string();
            addr.set_annotation(text, true);
        }
    }

    if let Some(addr) = object.field_mut("sin6_addr") {
        if let Some(octets) = addr.data().and_then(|d| <[u8; 16]>::try_from(d).ok()) {
            let text = Ipv6Addr::from(octets).to_string();
            addr.set_annotation(text, true);
        }
    }

    object
}

pub(super) fn iovec_array(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let count = (input.following as usize).min(MAX_ITEMS);
    let items = iovecs(input.raw, count, mem)?;

    Ok(Arg::array(input.name, input.raw, items))
}

fn iovecs(addr: u64, count: usize, mem: &dyn Memory) -> Result<Vec<Arg>> {
    let bytes = mem.read(addr, IOVEC.size * count)?;

    let items = record::decode_array(&bytes, &IOVEC, count)
        .into_iter()
        .map(|mut iovec| {
            preview_iov_base(&mut iovec, mem);
            Arg::object("", 0, iovec)
        })
        .collect();

    Ok(items)
}

// Replace the base pointer with (a prefix of) the bytes it points at.
fn preview_iov_base(iovec: &mut Object, mem: &dyn Memory) {
    let len = iovec.field("iov_len").map(|f| f.raw() as usize).unwrap_or(0);

    if let Some(base) = iovec.field_mut("iov_base") {
        let addr = base.raw();

        if addr == 0 {
            return;
        }

        if let Ok(data) = mem.read(addr, len.min(IOV_PREVIEW)) {
            *base = Arg::bytes("iov_base", addr, data);
        }
    }
}

pub(super) fn msghdr(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let bytes = mem.read(input.raw, MSGHDR.size)?;
    let object = enrich_msghdr(record::decode(&bytes, &MSGHDR), mem);

    Ok(Arg::object(input.name, input.raw, object))
}

pub(super) fn mmsghdr_array(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    // Entries actually transferred, once known; otherwise the request's `vlen`.
    let count = input
        .count_returned()
        .unwrap_or(input.following as usize)
        .min(MAX_ITEMS);

    let bytes = mem.read(input.raw, MMSGHDR.size * count)?;

    let items = record::decode_array(&bytes, &MMSGHDR, count)
        .into_iter()
        .map(|mut mmsghdr| {
            if let Some(hdr) = mmsghdr.field_mut("msg_hdr") {
                if let Some(object) = hdr.object_value() {
                    let object = enrich_msghdr(object.clone(), mem);
                    *hdr = Arg::object("msg_hdr", 0, object);
                }
            }
            Arg::object("", 0, mmsghdr)
        })
        .collect();

    Ok(Arg::array(input.name, input.raw, items))
}

// Follow the pointers of a decoded `msghdr`. Each is best-effort: an unreadable one stays
// a bare address.
fn enrich_msghdr(mut hdr: Object, mem: &dyn Memory) -> Object {
    let raw = |hdr: &Object, name| hdr.field(name).map(|f| f.raw()).unwrap_or(0);

    let name = raw(&hdr, "msg_name");
    let namelen = raw(&hdr, "msg_namelen") as usize;
    if name != 0 && namelen > 0 {
        if let Ok(bytes) = mem.read(name, namelen.min(SOCKADDR_STORAGE)) {
            replace(&mut hdr, "msg_name", Arg::object("msg_name", name, decode_sockaddr(&bytes)));
        }
    }

    let iov = raw(&hdr, "msg_iov");
    let iovlen = (raw(&hdr, "msg_iovlen") as usize).min(MAX_ITEMS);
    if iov != 0 {
        if let Ok(items) = iovecs(iov, iovlen, mem) {
            replace(&mut hdr, "msg_iov", Arg::array("msg_iov", iov, items));
        }
    }

    let control = raw(&hdr, "msg_control");
    let controllen = raw(&hdr, "msg_controllen") as usize;
    if control != 0 && controllen >= CMSGHDR.size {
        if let Ok(bytes) = mem.read(control, CMSGHDR.size) {
            let cmsg = record::decode(&bytes, &CMSGHDR);
            replace(&mut hdr, "msg_control", Arg::object("msg_control", control, cmsg));
        }
    }

    if let Some(flags) = hdr.field_mut("msg_flags") {
        annotate::msg_flags(flags, mem.pid());
    }

    hdr
}

fn replace(object: &mut Object, name: &str, arg: Arg) {
    if let Some(field) = object.field_mut(name) {
        *field = arg;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::memory::MemoryImage;
    use crate::ptracer::Pid;
    use crate::record::{self, shapes::*};
    use crate::types::{handle, ArgType, Extent, Input};

    fn image() -> MemoryImage {
        MemoryImage::new(Pid::from_raw(1))
    }

    fn sockaddr_in(port: u16, addr: [u8; 4]) -> Vec<u8> {
        let mut bytes = vec![0; SOCKADDR_IN.size];
        bytes[..2].copy_from_slice(&(libc::AF_INET as u16).to_le_bytes());
        bytes[2..4].copy_from_slice(&port.to_be_bytes());
        bytes[4..8].copy_from_slice(&addr);
        bytes
    }

    #[test]
    fn test_sockaddr_in() {
        let mem = image().with(0x1000, sockaddr_in(443, [10, 0, 0, 1]));
        let input = Input {
            extent: Extent::Known(16),
            ..Input::new("addr", 0x1000)
        };

        let arg = handle(ArgType::Sockaddr, &input, &mem);
        let addr = arg.object_value().unwrap();

        assert_eq!(addr.name, "sockaddr_in");
        assert_eq!(addr.field("sin_family").unwrap().annotation(), Some("AF_INET"));
        assert_eq!(addr.field("sin_port").unwrap().raw(), 443);
        assert_eq!(addr.field("sin_addr").unwrap().to_string(), "10.0.0.1");
    }

    #[test]
    fn test_sockaddr_in6() {
        let mut bytes = vec![0; SOCKADDR_IN6.size];
        bytes[..2].copy_from_slice(&(libc::AF_INET6 as u16).to_le_bytes());
        bytes[2..4].copy_from_slice(&80u16.to_be_bytes());
        bytes[23] = 1;
        let mem = image().with(0x1000, bytes);
        let input = Input {
            extent: Extent::Known(28),
            ..Input::new("addr", 0x1000)
        };

        let arg = handle(ArgType::Sockaddr, &input, &mem);
        let addr = arg.object_value().unwrap();

        assert_eq!(addr.field("sin6_addr").unwrap().to_string(), "::1");
        assert_eq!(addr.field("sin6_port").unwrap().raw(), 80);
    }

    #[test]
    fn test_short_sockaddr_un_is_zero_padded() {
        let mut bytes = (libc::AF_UNIX as u16).to_le_bytes().to_vec();
        bytes.extend_from_slice(b"/run/x.sock");
        let len = bytes.len();
        let mem = image().with(0x1000, bytes);
        let input = Input {
            extent: Extent::Known(len),
            ..Input::new("addr", 0x1000)
        };

        let arg = handle(ArgType::Sockaddr, &input, &mem);
        let addr = arg.object_value().unwrap();

        assert_eq!(addr.name, "sockaddr_un");
        assert_eq!(addr.field("sun_path").unwrap().data(), Some(&b"/run/x.sock"[..]));
    }

    #[test]
    fn test_iovec_array() {
        let mut iov = vec![];
        for (base, len) in [(0x2000u64, 2u64), (0x2002, 3)] {
            iov.extend_from_slice(&base.to_le_bytes());
            iov.extend_from_slice(&len.to_le_bytes());
        }
        let mem = image()
            .with(0x1000, iov)
            .with(0x2000, &b"hiyou"[..]);
        let input = Input {
            following: 2,
            ..Input::new("iov", 0x1000)
        };

        let arg = handle(ArgType::IovecArray, &input, &mem);
        let items = arg.items().unwrap();

        assert_eq!(items.len(), 2);
        let second = items[1].object_value().unwrap();
        assert_eq!(second.field("iov_base").unwrap().data(), Some(&b"you"[..]));
        assert_eq!(second.field("iov_len").unwrap().raw(), 3);
    }

    #[test]
    fn test_msghdr_follows_pointers() {
        let mut hdr = record::encode(&record::decode(&[], &MSGHDR), &MSGHDR);
        hdr[0..8].copy_from_slice(&0x2000u64.to_le_bytes());
        hdr[8..12].copy_from_slice(&16u32.to_le_bytes());
        hdr[16..24].copy_from_slice(&0x3000u64.to_le_bytes());
        hdr[24..32].copy_from_slice(&1u64.to_le_bytes());

        let mut iov = 0x4000u64.to_le_bytes().to_vec();
        iov.extend_from_slice(&4u64.to_le_bytes());

        let mem = image()
            .with(0x1000, hdr)
            .with(0x2000, sockaddr_in(53, [1, 1, 1, 1]))
            .with(0x3000, iov)
            .with(0x4000, &b"ping"[..]);

        let arg = handle(ArgType::Msghdr, &Input::new("msg", 0x1000), &mem);
        let msg = arg.object_value().unwrap();

        let name = msg.field("msg_name").unwrap().object_value().unwrap();
        assert_eq!(name.field("sin_port").unwrap().raw(), 53);

        let iov = msg.field("msg_iov").unwrap().items().unwrap();
        let base = iov[0].object_value().unwrap().field("iov_base").unwrap();
        assert_eq!(base.data(), Some(&b"ping"[..]));

        // No control data, so it stays a bare (NULL) pointer.
        assert_eq!(msg.field("msg_control").unwrap().raw(), 0);
    }
}
