use super::value::FieldValue;

/// Trait для записей, отображаемых в таблицах списков.
///
/// Запись: неизменяемая строка данных с уникальным ключом и набором
/// именованных полей. Представление таблицы никогда не изменяет записи.
pub trait TableRecord {
    /// Уникальный ключ записи (обычно `id`)
    fn record_key(&self) -> String;

    /// Значение поля по имени; `None`, если у записи нет такого поля
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Текст, по которому работает поиск.
    /// По умолчанию пустой, запись не находится ни по какому запросу.
    fn search_text(&self) -> String {
        String::new()
    }

    /// Ключ статуса для фильтра по статусу
    fn status_key(&self) -> Option<String> {
        None
    }
}
