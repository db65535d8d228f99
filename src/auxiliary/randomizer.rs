/// Builds a PCG32 generator seeded from the OS entropy source.
pub fn seeded_rng() -> randomize::PCG32 {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];
    getrandom(&mut seed).expect("failed to getrandom");

    let state = NativeEndian::read_u64(&seed[0..8]);
    let inc = NativeEndian::read_u64(&seed[8..16]);
    (state, inc).into()
}
