//! A bounds-checked reader over a blob of bytes.
//!
//! Every format reader pulls its fields through a [`ByteCursor`]. Each read
//! takes a statically known number of bytes, and a read that can't be
//! satisfied fails with [`Eof`] without moving the cursor.

use winnow::{
    Parser as _,
    binary::{Endianness as WinnowEndianness, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64},
    error::EmptyError,
    token::take,
};

use imgmeta_types::ByteOrder;

/// Sequential and random-access reads over an in-memory blob.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    /// The entire source. Seeks are relative to its start.
    blob: &'a [u8],

    /// Everything after the current position.
    input: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(blob: &'a [u8]) -> Self {
        Self { blob, input: blob }
    }

    /// Length of the whole source, in bytes.
    pub fn len(&self) -> u64 {
        self.blob.len() as u64
    }

    /// Whether the source has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    /// How many bytes are left after the current position.
    pub fn remaining(&self) -> u64 {
        self.input.len() as u64
    }

    /// The current offset from the start of the source.
    pub fn position(&self) -> u64 {
        (self.blob.len() - self.input.len()) as u64
    }

    /// Moves to an absolute offset.
    ///
    /// Seeking to exactly the end is fine - the next read will fail, though.
    pub fn seek(&mut self, offset: u64) -> Result<(), Eof> {
        let Some(rest) = usize::try_from(offset)
            .ok()
            .and_then(|offset| self.blob.get(offset..))
        else {
            log::error!(
                "Attempted to seek past the end! offset: `{offset}`, len: `{}`",
                self.len()
            );
            return Err(self.eof(offset.saturating_sub(self.position())));
        };

        log::trace!("Seeking to `{offset}`.");
        self.input = rest;
        Ok(())
    }

    /// Moves forward `n` bytes without looking at them.
    pub fn skip(&mut self, n: usize) -> Result<(), Eof> {
        log::trace!("Skipping `{n}` bytes at `{}`.", self.position());
        self.read_slice(n).map(|_| ())
    }

    /// Borrows the next `n` bytes from the source.
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8], Eof> {
        self.read_with(n as u64, |input| take(n).parse_next(input))
    }

    /// Looks at the next `n` bytes without moving past them.
    pub fn peek_slice(&self, n: usize) -> Result<&'a [u8], Eof> {
        self.input.get(..n).ok_or_else(|| self.eof(n as u64))
    }

    /// Copies out the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, Eof> {
        self.read_slice(n).map(<[u8]>::to_vec)
    }

    /// Reads `n` bytes as text, replacing any invalid UTF-8.
    pub fn read_string(&mut self, n: usize) -> Result<String, Eof> {
        self.read_slice(n)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_u8(&mut self) -> Result<u8, Eof> {
        self.read_with(1, |input| u8.parse_next(input))
    }

    pub fn read_i8(&mut self) -> Result<i8, Eof> {
        self.read_with(1, |input| i8.parse_next(input))
    }

    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16, Eof> {
        self.read_with(2, |input| u16(winnow_endianness(order)).parse_next(input))
    }

    pub fn read_i16(&mut self, order: ByteOrder) -> Result<i16, Eof> {
        self.read_with(2, |input| i16(winnow_endianness(order)).parse_next(input))
    }

    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32, Eof> {
        self.read_with(4, |input| u32(winnow_endianness(order)).parse_next(input))
    }

    pub fn read_i32(&mut self, order: ByteOrder) -> Result<i32, Eof> {
        self.read_with(4, |input| i32(winnow_endianness(order)).parse_next(input))
    }

    pub fn read_u64(&mut self, order: ByteOrder) -> Result<u64, Eof> {
        self.read_with(8, |input| u64(winnow_endianness(order)).parse_next(input))
    }

    pub fn read_i64(&mut self, order: ByteOrder) -> Result<i64, Eof> {
        self.read_with(8, |input| i64(winnow_endianness(order)).parse_next(input))
    }

    /// Reads an IEEE 754 single.
    pub fn read_f32(&mut self, order: ByteOrder) -> Result<f32, Eof> {
        self.read_with(4, |input| f32(winnow_endianness(order)).parse_next(input))
    }

    /// Reads an IEEE 754 double.
    pub fn read_f64(&mut self, order: ByteOrder) -> Result<f64, Eof> {
        self.read_with(8, |input| f64(winnow_endianness(order)).parse_next(input))
    }

    /// Runs one parser against the input.
    ///
    /// If it fails, the input is put back the way it was, so a read is
    /// either complete or didn't happen.
    fn read_with<T>(
        &mut self,
        size: u64,
        parser: impl FnOnce(&mut &'a [u8]) -> Result<T, EmptyError>,
    ) -> Result<T, Eof> {
        let checkpoint: &'a [u8] = self.input;

        match parser(&mut self.input) {
            Ok(value) => Ok(value),
            Err(_) => {
                self.input = checkpoint;
                let e = self.eof(size);
                log::debug!("Cursor read failed. err: {e}");
                Err(e)
            }
        }
    }

    fn eof(&self, requested: u64) -> Eof {
        Eof {
            position: self.position(),
            requested,
            remaining: self.remaining(),
        }
    }
}

const fn winnow_endianness(order: ByteOrder) -> WinnowEndianness {
    match order {
        ByteOrder::Big => WinnowEndianness::Big,
        ByteOrder::Little => WinnowEndianness::Little,
    }
}

/// A read asked for more bytes than the source had left.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Eof {
    /// Where the read was attempted.
    pub position: u64,

    /// How many bytes the read wanted.
    pub requested: u64,

    /// How many bytes were actually left.
    pub remaining: u64,
}

impl core::fmt::Display for Eof {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Ran out of data at offset `{}`. requested: `{}` bytes, remaining: `{}` bytes",
            self.position, self.requested, self.remaining
        )
    }
}

impl core::error::Error for Eof {}

#[cfg(test)]
mod tests {
    use imgmeta_types::ByteOrder;

    use super::{ByteCursor, Eof};
    use crate::util::logger;

    #[test]
    fn reads_both_byte_orders() {
        logger();

        let bytes = [0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x56, 0x78];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_u16(ByteOrder::Big), Ok(0x1234));
        assert_eq!(cursor.read_u16(ByteOrder::Little), Ok(0x7856));
        assert_eq!(cursor.read_u32(ByteOrder::Little), Ok(0x7856_3412));
        assert!(!cursor.is_empty());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reads_signed_and_floats() {
        logger();

        let mut bytes = Vec::new();
        bytes.push(0xff_u8);
        bytes.extend_from_slice((-2_i16).to_be_bytes().as_slice());
        bytes.extend_from_slice((-2025_i32).to_le_bytes().as_slice());
        bytes.extend_from_slice(i64::MIN.to_be_bytes().as_slice());
        bytes.extend_from_slice(1.5_f32.to_le_bytes().as_slice());
        bytes.extend_from_slice((-0.25_f64).to_be_bytes().as_slice());
        bytes.extend_from_slice(u64::MAX.to_le_bytes().as_slice());

        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_i8(), Ok(-1));
        assert_eq!(cursor.read_i16(ByteOrder::Big), Ok(-2));
        assert_eq!(cursor.read_i32(ByteOrder::Little), Ok(-2025));
        assert_eq!(cursor.read_i64(ByteOrder::Big), Ok(i64::MIN));
        assert_eq!(cursor.read_f32(ByteOrder::Little), Ok(1.5));
        assert_eq!(cursor.read_f64(ByteOrder::Big), Ok(-0.25));
        assert_eq!(cursor.read_u64(ByteOrder::Little), Ok(u64::MAX));
        assert_eq!(cursor.position(), bytes.len() as u64);
    }

    /// A short read must not eat the bytes it did find.
    #[test]
    fn failed_reads_leave_the_cursor_alone() {
        logger();

        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        cursor.skip(1).unwrap();

        assert_eq!(
            cursor.read_u32(ByteOrder::Big),
            Err(Eof {
                position: 1,
                requested: 4,
                remaining: 2
            })
        );
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_bytes(3).map_err(|e| e.requested), Err(3));
        assert_eq!(cursor.read_bytes(2), Ok(vec![2, 3]));
        assert_eq!(cursor.read_u8().map_err(|e| e.remaining), Err(0));
    }

    #[test]
    fn seeks_within_bounds() {
        logger();

        let mut cursor = ByteCursor::new(b"8BPS");
        cursor.seek(2).unwrap();
        assert_eq!(cursor.read_string(2), Ok(String::from("PS")));

        // the very end is a valid place to stand
        assert_eq!(cursor.seek(4), Ok(()));
        assert_eq!(cursor.remaining(), 0);

        assert!(cursor.seek(5).is_err());
        assert_eq!(cursor.position(), 4, "failed seek shouldn't move us");

        cursor.seek(0).unwrap();
        assert_eq!(cursor.read_slice(4), Ok(b"8BPS".as_slice()));
    }

    #[test]
    fn peeking_doesnt_move() {
        logger();

        let mut cursor = ByteCursor::new(b"8BPS");
        cursor.skip(1).unwrap();

        assert_eq!(cursor.peek_slice(2), Ok(b"BP".as_slice()));
        assert_eq!(cursor.peek_slice(3), Ok(b"BPS".as_slice()));
        assert_eq!(
            cursor.peek_slice(4),
            Err(Eof {
                position: 1,
                requested: 4,
                remaining: 3
            })
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn skips_are_bounds_checked() {
        logger();

        let mut cursor = ByteCursor::new(&[0; 6]);
        assert_eq!(cursor.skip(6), Ok(()));
        assert!(cursor.skip(1).is_err());
        assert_eq!(cursor.skip(0), Ok(()));
    }
}
