use yew::prelude::*;

use crate::models::Festival;
use crate::utils::format::format_date;
use crate::viewmodels::listing_viewmodel::Table;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub table: Table,
    #[prop_or(AttrValue::Static("No hay registros."))]
    pub empty_text: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let table = &props.table;
    if table.is_empty() {
        return html! { <p class="empty">{props.empty_text.clone()}</p> };
    }

    html! {
        <table class="listing-table">
            <thead>
                <tr>{ for table.columns.iter().map(|c| html! { <th>{c.clone()}</th> }) }</tr>
            </thead>
            <tbody>
                { for table.rows.iter().map(|row| html! {
                    <tr>{ for row.iter().map(|cell| html! { <td>{cell.clone()}</td> }) }</tr>
                }) }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct FestivalHeaderProps {
    pub festival: Festival,
}

/// Nombre, estado y fechas del festival sobre las pantallas de gestión
#[function_component(FestivalHeader)]
pub fn festival_header(props: &FestivalHeaderProps) -> Html {
    let festival = &props.festival;
    html! {
        <div class="festival-header">
            <h2>{festival.nombre.clone()}</h2>
            <span class={festival.status().badge_class()}>{festival.estado.clone().unwrap_or_default()}</span>
            <p>{format!("{} - {}", format_date(&festival.fecha_inicio), format_date(&festival.fecha_fin))}</p>
            if let Some(descripcion) = festival.descripcion.clone() {
                <p class="festival-description">{descripcion}</p>
            }
        </div>
    }
}
