//! Little-endian byte writer and the compact-size integer.
//!
//! `ByteWriter` accumulates output serializations and digest preimage bytes.

/// A variable-length integer as used for counts and script lengths.
///
/// Encodes in 1, 3, 5 or 9 bytes: values below `0xfd` are a single byte,
/// larger values carry a `0xfd`/`0xfe`/`0xff` marker followed by a
/// little-endian u16/u32/u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Wire-format length of this value: 1, 3, 5 or 9.
    pub fn length(&self) -> usize {
        match self.0 {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        }
    }

    /// Encode into a new byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut out = Vec::with_capacity(self.length());
        match self.length() {
            1 => out.push(v as u8),
            3 => {
                out.push(0xfd);
                out.extend_from_slice(&(v as u16).to_le_bytes());
            }
            5 => {
                out.push(0xfe);
                out.extend_from_slice(&(v as u32).to_le_bytes());
            }
            _ => {
                out.push(0xff);
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out
    }
}

impl From<usize> for VarInt {
    fn from(v: usize) -> Self {
        VarInt(v as u64)
    }
}

/// An append-only little-endian byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        ByteWriter { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_varint(&mut self, varint: VarInt) {
        self.buf.extend_from_slice(&varint.to_bytes());
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_encodings_at_size_boundaries() {
        let cases: Vec<(u64, Vec<u8>)> = vec![
            (0, vec![0x00]),
            (252, vec![0xfc]),
            (253, vec![0xfd, 0xfd, 0x00]),
            (65535, vec![0xfd, 0xff, 0xff]),
            (65536, vec![0xfe, 0x00, 0x00, 0x01, 0x00]),
            (4294967295, vec![0xfe, 0xff, 0xff, 0xff, 0xff]),
            (4294967296, vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]),
            (u64::MAX, vec![0xff; 9]),
        ];

        for (value, expected) in cases {
            let vi = VarInt(value);
            assert_eq!(vi.to_bytes(), expected, "encoding of {}", value);
            assert_eq!(vi.length(), expected.len(), "length of {}", value);
        }
    }

    #[test]
    fn test_writer_layout() {
        let mut writer = ByteWriter::new();
        writer.write_u32_le(0xDEADBEEF);
        writer.write_u64_le(0x0102030405060708);
        writer.write_varint(VarInt::from(300usize));
        writer.write_bytes(b"hi");
        assert_eq!(
            hex::encode(writer.as_bytes()),
            "efbeadde0807060504030201fd2c016869"
        );
        assert_eq!(writer.into_bytes().len(), 4 + 8 + 3 + 2);
    }
}
