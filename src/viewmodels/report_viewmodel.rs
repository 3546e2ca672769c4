// ============================================================================
// REPORT VIEWMODEL - Informes por festival (compras, asistentes, pulseras)
// ============================================================================
// Las filas llegan tipadas y se aplanan a `Table` con cabeceras legibles.
// ============================================================================

use crate::models::decimal::format_euros;
use crate::models::{Attendee, Bracelet, Purchase, Role};
use crate::utils::format::format_date;
use crate::viewmodels::listing_viewmodel::Table;

pub const SELECT_FESTIVAL: &str = "Selecciona un festival para generar un reporte.";
pub const EMPTY_REPORT: &str = "No hay datos para este reporte y festival.";
pub const REPORT_LOAD_FAILED: &str = "Error al cargar el reporte";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Compras,
    Asistentes,
    Pulseras,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Compras, ReportKind::Asistentes, ReportKind::Pulseras];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Compras => "compras",
            ReportKind::Asistentes => "asistentes",
            ReportKind::Pulseras => "pulseras",
        }
    }

    /// Desconocido => compras
    pub fn parse(raw: &str) -> ReportKind {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Compras => "Compras",
            ReportKind::Asistentes => "Asistentes",
            ReportKind::Pulseras => "Pulseras NFC",
        }
    }

    /// El admin lee las pulseras del endpoint de administración
    pub fn endpoint(&self, role: Role, id_festival: i64) -> String {
        match (self, role) {
            (ReportKind::Pulseras, Role::Admin) => {
                format!("/admin/festivales/{}/pulseras-nfc", id_festival)
            }
            (kind, _) => format!("/promotor/festivales/{}/{}", id_festival, kind.as_str()),
        }
    }
}

/// Festivales que ofrece el selector, según quién pide el informe
pub fn festival_source(role: Role) -> &'static str {
    match role {
        Role::Promotor => "/promotor/festivales",
        _ => "/admin/festivales",
    }
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn or_na(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

pub fn purchases_table(rows: &[Purchase]) -> Table {
    Table {
        columns: header(&["ID compra", "Comprador", "Email", "Total", "Entradas", "Fecha"]),
        rows: rows
            .iter()
            .map(|p| {
                vec![
                    p.id_compra.to_string(),
                    or_na(&p.nombre_comprador),
                    or_na(&p.email_comprador),
                    format_euros(p.total),
                    p.resumen_entradas.join(", "),
                    p.fecha_compra.as_deref().map(format_date).unwrap_or_default(),
                ]
            })
            .collect(),
    }
}

pub fn attendees_table(rows: &[Attendee]) -> Table {
    Table {
        columns: header(&["ID", "Nombre", "Email", "Teléfono"]),
        rows: rows
            .iter()
            .map(|a| {
                vec![
                    a.id_asistente.to_string(),
                    a.nombre.clone(),
                    a.email.clone(),
                    or_na(&a.telefono),
                ]
            })
            .collect(),
    }
}

pub fn bracelets_table(rows: &[Bracelet]) -> Table {
    Table {
        columns: header(&["UID", "Saldo", "Entrada", "Asistente", "Email", "Estado"]),
        rows: rows
            .iter()
            .map(|b| {
                vec![
                    b.codigo_uid.clone(),
                    format_euros(b.saldo),
                    or_na(&b.qr_entrada),
                    or_na(&b.nombre_asistente),
                    or_na(&b.email_asistente),
                    if b.activa { "Activa" } else { "Inactiva" }.to_string(),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_report_defaults_to_purchases() {
        assert_eq!(ReportKind::parse("asistentes"), ReportKind::Asistentes);
        assert_eq!(ReportKind::parse("facturas"), ReportKind::Compras);
    }

    #[test]
    fn admin_reads_bracelets_from_admin_endpoint() {
        assert_eq!(ReportKind::Compras.endpoint(Role::Admin, 3), "/promotor/festivales/3/compras");
        assert_eq!(ReportKind::Pulseras.endpoint(Role::Admin, 3), "/admin/festivales/3/pulseras-nfc");
        assert_eq!(ReportKind::Pulseras.endpoint(Role::Promotor, 3), "/promotor/festivales/3/pulseras");
        assert_eq!(festival_source(Role::Admin), "/admin/festivales");
    }

    #[test]
    fn purchase_rows_are_formatted() {
        let purchase: Purchase = serde_json::from_value(serde_json::json!({
            "idCompra": 12,
            "nombreComprador": "Ana",
            "emailComprador": "ana@example.com",
            "total": "90",
            "resumenEntradas": ["2x General", "1x VIP"],
            "fechaCompra": null
        }))
        .unwrap();
        let table = purchases_table(&[purchase]);
        assert_eq!(table.columns.len(), table.rows[0].len());
        assert_eq!(table.rows[0][3], "90.00 €");
        assert_eq!(table.rows[0][4], "2x General, 1x VIP");
    }

    #[test]
    fn missing_phone_shows_na() {
        let attendee = Attendee {
            id_asistente: 1,
            nombre: "Luis".into(),
            email: "luis@example.com".into(),
            telefono: None,
        };
        assert_eq!(attendees_table(&[attendee]).rows[0][3], "N/A");
        assert!(bracelets_table(&[]).is_empty());
    }
}
