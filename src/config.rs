//! Параметры и ограничения контроллера

/// Максимальное число нечетких множеств (размер массивов)
pub const MAX_SETS: usize = 5;

/// Минимальное число активных множеств
pub const MIN_SETS: u8 = 3;

/// Значения конфигурации по умолчанию
pub mod defaults {
    /// Число активных множеств
    pub const NUM_SETS: u8 = 3;
    /// Число точек дискретизации для расчета центра тяжести
    pub const NUM_ITERATIONS: u8 = 20;
    /// Уставка (целевое значение)
    pub const SET_POINT: f32 = 0.0;
    /// Игнорировать отрицательную ошибку
    pub const NEGATIVE_ERROR_OFF: bool = true;
}

/// Универс выходной переменной
///
/// Диапазон фиксирован: алгоритм вывода дискретизирует именно этот
/// интервал, а не огибающую выходных множеств. Выходные множества
/// должны укладываться в него.
pub mod universe {
    /// Нижняя граница диапазона выхода
    pub const RANGE_MIN: f32 = 0.0;
    /// Верхняя граница диапазона выхода
    pub const RANGE_MAX: f32 = 100.0;
}

/// Минимально допустимое число точек дискретизации
///
/// При одной точке шаг дискретизации не определен.
pub const MIN_ITERATIONS: u8 = 2;
