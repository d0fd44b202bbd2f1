//! Фасад нечеткого контроллера

use crate::config::{defaults, MAX_SETS, MIN_ITERATIONS, MIN_SETS};
use crate::inference::infer;
use crate::math::constrain_u8;
use crate::rule::{Rule, RuleBase};
use crate::set::FuzzySet;

/// Нечеткий контроллер Мамдани: один вход (ошибка), один выход
///
/// Держит конфигурацию (уставку, множества, правила, число итераций)
/// и на каждый вызов [`FuzzyMamdani::compute_output`] выполняет
/// независимый цикл вывода. Состояния между вызовами нет: при
/// неизменной конфигурации одинаковый вход дает одинаковый выход.
#[derive(Clone, Debug)]
pub struct FuzzyMamdani {
    base: RuleBase,
    num_iterations: u8,
    set_point: f32,
    negative_error_off: bool,
}

impl FuzzyMamdani {
    /// Контроллер с конфигурацией по умолчанию
    ///
    /// Три пустых множества, тождественные правила, 20 точек
    /// дискретизации, уставка 0, отрицательная ошибка подавляется.
    pub fn new() -> Self {
        Self {
            base: RuleBase::new(defaults::NUM_SETS),
            num_iterations: defaults::NUM_ITERATIONS,
            set_point: defaults::SET_POINT,
            negative_error_off: defaults::NEGATIVE_ERROR_OFF,
        }
    }

    /// Число активных множеств, ограничивается диапазоном [3, 5]
    pub fn set_num_sets(&mut self, n: u8) {
        self.base.set_num_sets(constrain_u8(n, MIN_SETS, MAX_SETS as u8));
    }

    /// Задание входного множества по индексу
    pub fn set_input_set(&mut self, idx: u8, set: FuzzySet) {
        self.base.set_input_set(idx, set);
    }

    /// Задание выходного множества по индексу
    pub fn set_output_set(&mut self, idx: u8, set: FuzzySet) {
        self.base.set_output_set(idx, set);
    }

    /// Задание правила: вход `input_idx` -> выход `output_idx`
    pub fn set_rule(&mut self, rule_idx: u8, input_idx: u8, output_idx: u8) {
        self.base.set_rule(rule_idx, input_idx, output_idx);
    }

    /// Число точек дискретизации, не меньше двух
    pub fn set_iterations(&mut self, iterations: u8) {
        self.num_iterations = constrain_u8(iterations, MIN_ITERATIONS, u8::MAX);
    }

    /// Задание уставки
    pub fn set_set_point(&mut self, sp: f32) {
        self.set_point = sp;
    }

    /// Подавление отрицательной ошибки (реакция только на недолет)
    pub fn set_negative_error_off(&mut self, off: bool) {
        self.negative_error_off = off;
    }

    /// Текущая уставка
    pub fn set_point(&self) -> f32 {
        self.set_point
    }

    /// Число активных множеств
    pub fn num_sets(&self) -> u8 {
        self.base.num_sets()
    }

    /// Текущее число точек дискретизации
    pub fn iterations(&self) -> u8 {
        self.num_iterations
    }

    /// Подавляется ли отрицательная ошибка
    pub fn negative_error_off(&self) -> bool {
        self.negative_error_off
    }

    /// Входное множество по активному индексу
    pub fn input_set(&self, idx: u8) -> Option<FuzzySet> {
        self.base.input_set(idx)
    }

    /// Выходное множество по активному индексу
    pub fn output_set(&self, idx: u8) -> Option<FuzzySet> {
        self.base.output_set(idx)
    }

    /// Правило по активному индексу
    pub fn rule(&self, idx: u8) -> Option<Rule> {
        self.base.rule(idx)
    }

    /// Расчет управляющего воздействия по текущему измерению
    pub fn compute_output(&self, current_input: f32) -> f32 {
        let mut error = self.set_point - current_input;
        if self.negative_error_off && error < 0.0 {
            error = 0.0;
        }
        infer(error, &self.base, self.num_iterations)
    }
}

impl Default for FuzzyMamdani {
    fn default() -> Self {
        Self::new()
    }
}

// Модульные тесты
#[cfg(test)]
mod tests {
    use super::*;

    fn tri(min: f32, peak: f32, max: f32) -> FuzzySet {
        FuzzySet::Triangular { min, peak, max }
    }

    /// Конфигурация с одним рабочим правилом из регрессионного сценария
    fn single_rule_controller() -> FuzzyMamdani {
        let mut fz = FuzzyMamdani::new();
        fz.set_input_set(0, tri(0.0, 0.0, 50.0));
        fz.set_output_set(0, tri(0.0, 0.0, 100.0));
        fz.set_rule(0, 0, 0);
        fz.set_set_point(50.0);
        fz.set_iterations(20);
        fz.set_negative_error_off(true);
        fz
    }

    #[test]
    fn test_defaults() {
        let fz = FuzzyMamdani::new();
        assert_eq!(fz.num_sets(), 3);
        assert_eq!(fz.iterations(), 20);
        assert_eq!(fz.set_point(), 0.0);
        assert!(fz.negative_error_off());
    }

    #[test]
    fn test_num_sets_clamped() {
        let mut fz = FuzzyMamdani::new();
        fz.set_num_sets(1);
        assert_eq!(fz.num_sets(), 3);
        fz.set_num_sets(10);
        assert_eq!(fz.num_sets(), 5);
        fz.set_num_sets(4);
        assert_eq!(fz.num_sets(), 4);
    }

    #[test]
    fn test_iterations_clamped() {
        let mut fz = FuzzyMamdani::new();
        fz.set_iterations(1);
        assert_eq!(fz.iterations(), 2);
        fz.set_iterations(0);
        assert_eq!(fz.iterations(), 2);
        fz.set_iterations(100);
        assert_eq!(fz.iterations(), 100);
    }

    #[test]
    fn test_golden_single_rule_regression() {
        // вход 50 при уставке 50: ошибка 0, принадлежность входному
        // множеству [0,0,50] равна 1, выходная кривая - спад (100-x)/100.
        // По 20 точкам x_i = 100*i/19:
        //   denominator = sum(1 - i/19)        = 10
        //   numerator   = sum(x_i * (1 - i/19)) = 11400/361 * 10
        // итог 11400/361
        let fz = single_rule_controller();
        let out = fz.compute_output(50.0);
        let expected = 11400.0 / 361.0; // ~31.5789
        assert!((out - expected).abs() < 1e-3, "out = {out}");
    }

    #[test]
    fn test_membership_of_zero_error_is_one() {
        let fz = single_rule_controller();
        assert_eq!(fz.input_set(0).unwrap().membership(0.0), 1.0);
    }

    #[test]
    fn test_negative_error_suppressed() {
        // перелет при включенном подавлении эквивалентен нулевой ошибке
        let fz = single_rule_controller();
        let at_set_point = fz.compute_output(50.0);
        let overshoot = fz.compute_output(80.0);
        assert_eq!(overshoot, at_set_point);
    }

    #[test]
    fn test_negative_error_not_suppressed_when_off() {
        let mut fz = single_rule_controller();
        fz.set_negative_error_off(false);
        // ошибка -30 вне носителя входного множества, ничего не срабатывает
        assert_eq!(fz.compute_output(80.0), 0.0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let fz = single_rule_controller();
        let first = fz.compute_output(30.0);
        for _ in 0..10 {
            assert_eq!(fz.compute_output(30.0), first);
        }
    }

    #[test]
    fn test_error_outside_all_supports_gives_zero() {
        let mut fz = single_rule_controller();
        fz.set_set_point(500.0);
        // ошибка 470 вне носителя [0, 50]
        assert_eq!(fz.compute_output(30.0), 0.0);
    }

    #[test]
    fn test_config_write_past_active_count_is_noop() {
        let mut fz = single_rule_controller();
        let before = fz.compute_output(30.0);
        fz.set_input_set(3, tri(0.0, 25.0, 50.0));
        fz.set_output_set(4, tri(0.0, 25.0, 50.0));
        fz.set_rule(0, 0, 4);
        assert_eq!(fz.compute_output(30.0), before);
        assert!(fz.input_set(3).is_none());
    }

    #[test]
    fn test_get_set_point_roundtrip() {
        let mut fz = FuzzyMamdani::new();
        fz.set_set_point(42.5);
        assert_eq!(fz.set_point(), 42.5);
    }
}
