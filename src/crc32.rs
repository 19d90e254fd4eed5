//! CRC-32 checksum (IEEE 802.3, the variant ZIP uses).
//!
//! Reflected polynomial `0xEDB88320`, initial value and final XOR
//! `0xFFFFFFFF`, processed one byte at a time through a 256-entry table.
//!
//! The shared table is evaluated at compile time, so every caller on every
//! thread reads the same immutable `static`.

/// Reflected CRC-32 polynomial.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Lookup table shared by [`checksum`] and [`Crc32`].
pub static TABLE: [u32; 256] = build_table();

/// Build the 256-entry lookup table.
///
/// Pure: every call returns the same table. Prefer [`TABLE`] instead of
/// calling this at runtime.
pub const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLYNOMIAL ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Compute the CRC-32 of `bytes` using `table`.
pub fn crc32(table: &[u32; 256], bytes: &[u8]) -> u32 {
    !update(table, 0xFFFF_FFFF, bytes)
}

/// Compute the CRC-32 of `bytes` using the shared [`TABLE`].
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32(&TABLE, bytes)
}

#[inline]
fn update(table: &[u32; 256], mut c: u32, bytes: &[u8]) -> u32 {
    for &b in bytes {
        c = table[((c ^ b as u32) & 0xFF) as usize] ^ (c >> 8);
    }
    c
}

/// Incremental CRC-32 state.
///
/// Feeding the same bytes in any number of chunks yields the same value as
/// [`checksum`] over their concatenation.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self { state: 0xFFFF_FFFF }
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.state = update(&TABLE, self.state, bytes);
    }

    pub fn finalize(&self) -> u32 {
        !self.state
    }
}
