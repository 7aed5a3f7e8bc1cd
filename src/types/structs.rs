use crate::arg::Arg;
use crate::error::Result;
use crate::memory::Memory;
use crate::record::{self, shapes::*, Shape};

use super::{Input, MAX_ITEMS};

/// One record of shape `shape` at the argument's address.
pub(super) fn record(input: &Input, mem: &dyn Memory, shape: &'static Shape) -> Result<Arg> {
    let bytes = mem.read(input.raw, shape.size)?;
    let object = record::decode(&bytes, shape);

    Ok(Arg::object(input.name, input.raw, object))
}

/// `count` consecutive records of shape `shape`.
pub(super) fn records(
    input: &Input,
    mem: &dyn Memory,
    shape: &'static Shape,
    count: usize,
) -> Result<Arg> {
    let count = count.min(MAX_ITEMS);
    let bytes = mem.read(input.raw, shape.size * count)?;

    let items = record::decode_array(&bytes, shape, count)
        .into_iter()
        .map(|object| Arg::object("", 0, object))
        .collect();

    Ok(Arg::array(input.name, input.raw, items))
}

/// `io_submit`'s array of `nr` pointers to control blocks.
pub(super) fn iocb_array(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let count = (input.preceding as usize).min(MAX_ITEMS);
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let slot = match input.raw.checked_add(8 * i as u64) {
            Some(slot) => slot,
            None => break,
        };
        let addr = mem.read_u64(slot)?;

        let bytes = match addr {
            0 => None,
            addr => mem.read(addr, IOCB.size).ok(),
        };

        let item = match bytes {
            Some(bytes) => Arg::object("", addr, record::decode(&bytes, &IOCB)),
            None => Arg::address("", addr),
        };
        items.push(item);
    }

    Ok(Arg::array(input.name, input.raw, items))
}

/// A single event when passed in, the ready list when written by the kernel.
pub(super) fn epoll_event(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    if input.destination {
        let count = input.count_returned().unwrap_or(0);
        records(input, mem, &EPOLL_EVENT, count)
    } else {
        record(input, mem, &EPOLL_EVENT)
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryImage;
    use crate::ptracer::Pid;
    use crate::record::{self, shapes::*};
    use crate::types::{handle, ArgType, Input};

    #[test]
    fn test_iocb_array_follows_pointers() {
        let mut iocb = record::encode(&record::decode(&[], &IOCB), &IOCB);
        iocb[20..24].copy_from_slice(&7u32.to_le_bytes());

        let mut pointers = 0x2000u64.to_le_bytes().to_vec();
        pointers.extend_from_slice(&0u64.to_le_bytes());

        let mem = MemoryImage::new(Pid::from_raw(1))
            .with(0x1000, pointers)
            .with(0x2000, iocb);
        let input = Input {
            preceding: 2,
            ..Input::new("iocbpp", 0x1000)
        };

        let arg = handle(ArgType::Iocb, &input, &mem);
        let items = arg.items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].object_value().unwrap().field("aio_fildes").unwrap().raw(), 7);
        assert_eq!(items[1].annotation(), Some("NULL"));
    }

    #[test]
    fn test_epoll_event_direction() {
        let mut events = vec![];
        for fd in [5u64, 6] {
            events.extend_from_slice(&1u32.to_le_bytes());
            events.extend_from_slice(&fd.to_le_bytes());
        }
        let mem = MemoryImage::new(Pid::from_raw(1)).with(0x1000, events);

        let ctl = handle(ArgType::EpollEvent, &Input::new("event", 0x1000), &mem);
        assert_eq!(ctl.object_value().unwrap().field("data").unwrap().raw(), 5);

        let wait = Input {
            destination: true,
            ret: Some(2),
            ..Input::new("events", 0x1000)
        };
        let ready = handle(ArgType::EpollEvent, &wait, &mem);
        let items = ready.items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].object_value().unwrap().field("data").unwrap().raw(), 6);
    }
}
