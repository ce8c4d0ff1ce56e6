// src/services/wire_reader.rs

use super::errors::TlsParserError;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Read-only cursor over a handshake buffer.
///
/// Every read first checks that enough bytes remain and fails with
/// `TlsParserError::InvalidLength` otherwise, so the position never runs
/// past the end of the slice.
#[derive(Debug)]
pub struct WireReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        WireReader {
            cursor: Cursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `len` bytes are left.
    pub fn ensure(&self, len: usize) -> Result<(), TlsParserError> {
        if self.remaining() < len {
            return Err(TlsParserError::InvalidLength);
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, TlsParserError> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, TlsParserError> {
        self.ensure(2)?;
        Ok(self.cursor.read_u16::<BigEndian>()?)
    }

    pub fn read_u24(&mut self) -> Result<u32, TlsParserError> {
        self.ensure(3)?;
        Ok(self.cursor.read_u24::<BigEndian>()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, TlsParserError> {
        self.ensure(4)?;
        Ok(self.cursor.read_u32::<BigEndian>()?)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TlsParserError> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.cursor.read_exact(&mut out)?;
        Ok(out)
    }

    /// Copies the next `len` bytes into an owned buffer.
    pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, TlsParserError> {
        self.ensure(len)?;
        let mut out = vec![0u8; len];
        self.cursor.read_exact(&mut out)?;
        Ok(out)
    }

    /// Copies whatever is left and moves to the end.
    pub fn read_rest(&mut self) -> Vec<u8> {
        let start = self.position();
        let rest = self.cursor.get_ref()[start..].to_vec();
        self.cursor.set_position(self.cursor.get_ref().len() as u64);
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian_fields_in_order() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0x0203);
        assert_eq!(reader.read_u24().unwrap(), 0x040506);
        assert_eq!(reader.read_u32().unwrap(), 0x0708090A);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_short_read_fails_without_advancing() {
        let data = [0xAA, 0xBB];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u24(), Err(TlsParserError::InvalidLength));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_vec(3), Err(TlsParserError::InvalidLength));
        assert_eq!(reader.read_u16().unwrap(), 0xAABB);
        assert_eq!(reader.read_u8(), Err(TlsParserError::InvalidLength));
    }

    #[test]
    fn test_read_array_and_rest() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = WireReader::new(&data);

        let head: [u8; 2] = reader.read_array().unwrap();
        assert_eq!(head, [1, 2]);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.read_rest(), vec![3, 4, 5]);
        assert!(reader.is_empty());
        assert!(reader.read_rest().is_empty());
    }

    #[test]
    fn test_zero_length_vec_on_empty_reader() {
        let mut reader = WireReader::new(&[]);
        assert_eq!(reader.read_vec(0).unwrap(), Vec::<u8>::new());
        assert_eq!(reader.ensure(1), Err(TlsParserError::InvalidLength));
    }
}
