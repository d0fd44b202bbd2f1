//! Машина нечеткого вывода Мамдани
//!
//! Дискретизированная композиция min-max с дефаззификацией методом
//! центра тяжести. Универс выхода фиксирован конфигурацией
//! [`crate::config::universe`], число обращений к функциям
//! принадлежности ограничено произведением числа итераций на число
//! активных правил.

use crate::config::{universe, MAX_SETS, MIN_ITERATIONS};
use crate::rule::RuleBase;

/// Вывод управляющего воздействия по текущей ошибке
///
/// Возвращает центр тяжести агрегированной кривой принадлежности.
/// Если ни одно правило не сработало ни в одной точке, возвращает 0.0.
pub(crate) fn infer(error: f32, base: &RuleBase, num_iterations: u8) -> f32 {
    if num_iterations < MIN_ITERATIONS {
        return 0.0;
    }

    let num_rules = base.num_sets() as usize;
    let step = (universe::RANGE_MAX - universe::RANGE_MIN) / (num_iterations - 1) as f32;

    // Степень срабатывания антецедента не зависит от точки выборки,
    // считается один раз на правило
    let mut mu_error = [0.0f32; MAX_SETS];
    for (r, mu) in mu_error.iter_mut().enumerate().take(num_rules) {
        *mu = base.input_of_rule(r).membership(error);
    }

    let mut numerator = 0.0f32;
    let mut denominator = 0.0f32;

    for i in 0..num_iterations {
        let x_output = universe::RANGE_MIN + i as f32 * step;

        // min - нечеткое И внутри правила, max - нечеткое ИЛИ между правилами
        let mut mu_final = 0.0f32;
        for r in 0..num_rules {
            let mu_control = base.output_of_rule(r).membership(x_output);
            mu_final = mu_final.max(mu_error[r].min(mu_control));
        }

        numerator += x_output * mu_final;
        denominator += mu_final;
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
