//! Нечеткий контроллер Мамдани для встраиваемых контуров управления
//!
//! Один вход (ошибка регулирования), один выход (управляющее воздействие).
//! Вывод по схеме min-max с дефаззификацией методом центра тяжести.
//! Без динамических аллокаций: все множества и правила лежат в массивах
//! фиксированного размера, объем вычислений ограничен числом итераций
//! дискретизации.
//!
//! Типовое использование - один вызов [`FuzzyMamdani::compute_output`]
//! на такт контура управления. Контроллер не содержит внутренней
//! синхронизации, при доступе из нескольких задач она внешняя.

#![cfg_attr(not(test), no_std)]

/// Предупреждение в лог при включенной поддержке defmt
macro_rules! fz_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

pub mod config;
mod controller;
mod inference;
mod math;
mod rule;
mod set;

pub use controller::FuzzyMamdani;
pub use rule::{Rule, RuleBase};
pub use set::FuzzySet;
