//! Компонент ячейки таблицы для денежных значений
//!
//! ```rust,ignore
//! <TableCellMoney value=customer.credit_limit />
//! <TableCellMoney value=order.total bold=true />
//! ```

use super::number_format::format_rupiah;
use leptos::prelude::*;
use thaw::*;

/// Ячейка с суммой в рупиях, выровненная по правому краю
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<i64>,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {move || format_rupiah(value.get())}
            </span>
        </TableCell>
    }
}
