//! Pure conversion of raw 24 bit result registers to physical units.

// these are fixed properties of the sensor frontend
/// fixed point scale of the ADC results, 2^21 counts per fullscale
const SCALE: f32 = 2097152.0;
/// span of the temperature result register in degree Celsius
const TEMPERATURE_SPAN: f32 = 25.0;

/// Sign extend the low 24 bits of a result register into an i32 without
/// type punning: shift the field up to the sign bit, arithmetic shift back.
fn sign_extend(raw: u32) -> i32 {
    ((raw << 8) as i32) >> 8
}

/// pressure in the unit of `fullscale`
pub fn pressure(raw: u32, fullscale: f32) -> f32 {
    sign_extend(raw) as f32 / SCALE * fullscale
}

/// temperature in degree Celsius
pub fn temperature(raw: u32) -> f32 {
    sign_extend(raw) as f32 / SCALE * TEMPERATURE_SPAN
}
