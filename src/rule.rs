//! База правил: множества входа и выхода плюс связи между ними

use crate::config::{MAX_SETS, MIN_SETS};
use crate::math::constrain_u8;
use crate::set::FuzzySet;

/// Правило "ЕСЛИ ошибка в множестве i ТО выход в множестве o"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rule {
    /// Индекс входного множества
    pub input_idx: u8,
    /// Индекс выходного множества
    pub output_idx: u8,
}

/// База правил фиксированной емкости
///
/// Массивы всегда размера [`MAX_SETS`], активны только первые `num_sets`
/// элементов, остальные игнорируются всеми операциями. Запись по
/// неактивному индексу молча отбрасывается, прежняя конфигурация
/// сохраняется.
#[derive(Clone, Debug)]
pub struct RuleBase {
    inputs: [FuzzySet; MAX_SETS],
    outputs: [FuzzySet; MAX_SETS],
    rules: [Rule; MAX_SETS],
    num_sets: u8,
}

impl RuleBase {
    /// Пустая база: тождественные правила i -> i, пустые множества.
    /// Число активных множеств ограничивается диапазоном [3, 5].
    pub fn new(num_sets: u8) -> Self {
        let mut rules = [Rule {
            input_idx: 0,
            output_idx: 0,
        }; MAX_SETS];
        for (i, rule) in rules.iter_mut().enumerate() {
            rule.input_idx = i as u8;
            rule.output_idx = i as u8;
        }

        Self {
            inputs: [FuzzySet::default(); MAX_SETS],
            outputs: [FuzzySet::default(); MAX_SETS],
            rules,
            num_sets: constrain_u8(num_sets, MIN_SETS, MAX_SETS as u8),
        }
    }

    /// Число активных множеств
    #[inline]
    pub fn num_sets(&self) -> u8 {
        self.num_sets
    }

    pub(crate) fn set_num_sets(&mut self, n: u8) {
        self.num_sets = n;
    }

    /// Задание входного множества
    pub fn set_input_set(&mut self, idx: u8, set: FuzzySet) {
        if idx < self.num_sets {
            self.inputs[idx as usize] = set;
        } else {
            fz_warn!("входное множество {}: индекс вне диапазона, запись отброшена", idx);
        }
    }

    /// Задание выходного множества
    pub fn set_output_set(&mut self, idx: u8, set: FuzzySet) {
        if idx < self.num_sets {
            self.outputs[idx as usize] = set;
        } else {
            fz_warn!("выходное множество {}: индекс вне диапазона, запись отброшена", idx);
        }
    }

    /// Задание правила: все три индекса должны быть активны
    pub fn set_rule(&mut self, rule_idx: u8, input_idx: u8, output_idx: u8) {
        if rule_idx < self.num_sets && input_idx < self.num_sets && output_idx < self.num_sets {
            self.rules[rule_idx as usize] = Rule {
                input_idx,
                output_idx,
            };
        } else {
            fz_warn!("правило {}: индексы вне диапазона, запись отброшена", rule_idx);
        }
    }

    /// Входное множество по активному индексу
    pub fn input_set(&self, idx: u8) -> Option<FuzzySet> {
        (idx < self.num_sets).then(|| self.inputs[idx as usize])
    }

    /// Выходное множество по активному индексу
    pub fn output_set(&self, idx: u8) -> Option<FuzzySet> {
        (idx < self.num_sets).then(|| self.outputs[idx as usize])
    }

    /// Правило по активному индексу
    pub fn rule(&self, idx: u8) -> Option<Rule> {
        (idx < self.num_sets).then(|| self.rules[idx as usize])
    }

    #[inline]
    pub(crate) fn input_of_rule(&self, r: usize) -> &FuzzySet {
        &self.inputs[self.rules[r].input_idx as usize]
    }

    #[inline]
    pub(crate) fn output_of_rule(&self, r: usize) -> &FuzzySet {
        &self.outputs[self.rules[r].output_idx as usize]
    }
}
