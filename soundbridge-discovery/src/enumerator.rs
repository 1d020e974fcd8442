//! Core enumeration logic and iterator implementation.
//!
//! One enumeration cycle is: invoke the tool, read the dump file back, parse
//! the rows, then yield them one at a time. The I/O happens up front in
//! [`EnumerationIterator::new`] so that failures surface as errors instead of
//! silently-empty iterations; iteration itself is lazy.

use crate::error::Result;
use crate::record::parse_device_list;
use crate::tool::VolumeToolCommand;
use crate::{DeviceEvent, DeviceRecord};

/// Iterator over the device records of one enumeration cycle.
///
/// Yields `DeviceEvent::Found` for every record the tool reported, in the
/// order the tool reported them (discovery order). Use
/// [`speakers_only`](EnumerationIterator::speakers_only) to restrict the
/// stream to hardware render endpoints.
pub struct EnumerationIterator {
    buffer: Vec<DeviceRecord>,
    index: usize,
    speakers_only: bool,
}

impl EnumerationIterator {
    /// Run one enumeration cycle and return an iterator over its records.
    ///
    /// Invokes the tool, reads the output file, and parses it. Any failure
    /// along the way aborts the cycle; nothing is yielded and the error is
    /// returned to the caller.
    pub fn new(command: &VolumeToolCommand) -> Result<Self> {
        command.save_device_list()?;
        let text = command.read_device_list()?;
        let buffer = parse_device_list(&text)?;

        tracing::debug!(devices = buffer.len(), "enumeration cycle complete");

        Ok(Self::from_records(buffer))
    }

    /// Build an iterator over an already-enumerated record list.
    pub fn from_records(records: Vec<DeviceRecord>) -> Self {
        Self {
            buffer: records,
            index: 0,
            speakers_only: false,
        }
    }

    /// Restrict the iterator to speaker devices (kind Device, direction Render).
    pub fn speakers_only(mut self) -> Self {
        self.speakers_only = true;
        self
    }
}

impl Iterator for EnumerationIterator {
    type Item = DeviceEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.buffer.get(self.index)?;
            self.index += 1;

            if self.speakers_only && !record.is_speaker() {
                continue;
            }

            return Some(DeviceEvent::Found(record.clone()));
        }
    }
}
