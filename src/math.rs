//! Математические утилиты

/// Ограничение значения в заданных пределах
#[inline(always)]
pub(crate) fn constrain(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Ограничение целочисленного значения в заданных пределах
#[inline(always)]
pub(crate) fn constrain_u8(value: u8, min: u8, max: u8) -> u8 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
