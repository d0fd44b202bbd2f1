//! Нечеткие множества и функции принадлежности

use crate::math::constrain;

/// Нечеткое множество - кусочно-линейная функция принадлежности
///
/// Точки излома задаются по возрастанию; за монотонность отвечает
/// вызывающая сторона. Совпадение соседних точек допускается: нулевой
/// по ширине фронт трактуется как ступенька, а множество с нулевой
/// шириной носителя (`max <= min`) нигде не имеет принадлежности.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FuzzySet {
    /// Треугольное множество: подъем от `min` до `peak`, спад до `max`
    Triangular { min: f32, peak: f32, max: f32 },
    /// Трапециевидное множество: плато между `shoulder_left` и
    /// `shoulder_right` включительно
    Trapezoidal {
        min: f32,
        shoulder_left: f32,
        shoulder_right: f32,
        max: f32,
    },
}

impl FuzzySet {
    /// Степень принадлежности значения `x` множеству, в диапазоне [0, 1]
    ///
    /// Чистая функция без состояния. Фронты вычисляются только строго
    /// между различными точками излома, деление на ноль исключено.
    #[inline]
    pub fn membership(&self, x: f32) -> f32 {
        match *self {
            FuzzySet::Triangular { min, peak, max } => {
                if libm::fabsf(max - min) < f32::EPSILON || x < min || x > max {
                    0.0
                } else if x < peak {
                    constrain((x - min) / (peak - min), 0.0, 1.0)
                } else if x > peak {
                    constrain((max - x) / (max - peak), 0.0, 1.0)
                } else {
                    1.0
                }
            }
            FuzzySet::Trapezoidal {
                min,
                shoulder_left,
                shoulder_right,
                max,
            } => {
                if libm::fabsf(max - min) < f32::EPSILON || x < min || x > max {
                    0.0
                } else if x < shoulder_left {
                    constrain((x - min) / (shoulder_left - min), 0.0, 1.0)
                } else if x > shoulder_right {
                    constrain((max - x) / (max - shoulder_right), 0.0, 1.0)
                } else {
                    1.0
                }
            }
        }
    }
}

impl Default for FuzzySet {
    /// Пустое множество: нулевой носитель, принадлежность всюду 0
    fn default() -> Self {
        FuzzySet::Triangular {
            min: 0.0,
            peak: 0.0,
            max: 0.0,
        }
    }
}
