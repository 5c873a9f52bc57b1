//! Arithmetic in GF(2^8) with the AES reduction polynomial x⁸ + x⁴ + x³ + x + 1
//!
//! Addition in this field is XOR and needs no helper. Multiplication is
//! carry-less with reduction by 0x1B whenever the high bit shifts out.

/// Low byte of the reduction polynomial (0x11B without the x⁸ term)
pub const REDUCTION: u8 = 0x1B;

/// Multiply by x (i.e. by 0x02)
#[inline(always)]
pub fn xtime(a: u8) -> u8 {
    (a << 1) ^ ((a >> 7) * REDUCTION)
}

/// Multiply two bytes in GF(2⁸)
///
/// Total over all 256 × 256 inputs; commutative and associative, with
/// identity 1 and absorbing element 0.
#[inline(always)]
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        a = xtime(a);
        b >>= 1;
    }
    p
}
