//! Состояние диалогов страницы.
//!
//! Одно значение описывает, какой диалог открыт и для какой записи.
//! Открытие нового диалога закрывает предыдущий, поэтому два диалога
//! одновременно открыты быть не могут.

/// Открытый диалог страницы.
///
/// `D`: перечисление видов диалогов конкретной страницы, варианты
/// которого несут ключ целевой записи (например, `Edit(id)`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState<D> {
    #[default]
    Closed,
    Open(D),
}

impl<D: PartialEq> DialogState<D> {
    pub fn open(&mut self, dialog: D) {
        *self = Self::Open(dialog);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn current(&self) -> Option<&D> {
        match self {
            Self::Open(dialog) => Some(dialog),
            Self::Closed => None,
        }
    }

    pub fn is(&self, dialog: &D) -> bool {
        self.current() == Some(dialog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestDialog {
        Add,
        Edit(i64),
        Delete(i64),
    }

    #[test]
    fn test_default_is_closed() {
        let state: DialogState<TestDialog> = DialogState::default();
        assert!(!state.is_open());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_opening_replaces_previous_dialog() {
        let mut state = DialogState::default();
        state.open(TestDialog::Edit(1));
        state.open(TestDialog::Delete(2));

        assert!(state.is(&TestDialog::Delete(2)));
        assert!(!state.is(&TestDialog::Edit(1)));
    }

    #[test]
    fn test_close() {
        let mut state = DialogState::Open(TestDialog::Add);
        state.close();
        assert_eq!(state, DialogState::Closed);
    }
}
