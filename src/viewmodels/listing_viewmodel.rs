// ============================================================================
// LISTING VIEWMODEL - Pantallas de gestión de solo lectura
// ============================================================================
// Rutas de consulta sin acciones: el JSON de su endpoint se pinta como tabla.
// ============================================================================

use serde_json::Value;

use crate::state::routes::Route;

/// Qué pedir y cómo titularlo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSpec {
    pub title: String,
    pub endpoint: String,
    /// Festival cuyo detalle se muestra como cabecera
    pub festival_header: Option<i64>,
    pub back: Route,
}

impl ListingSpec {
    pub fn for_route(route: &Route) -> Option<ListingSpec> {
        let spec = |title: &str, endpoint: String, festival_header: Option<i64>, back: Route| ListingSpec {
            title: title.to_string(),
            endpoint,
            festival_header,
            back,
        };

        match route {
            Route::AdminClients => Some(spec(
                "Asistentes",
                "/admin/clientes?tab=asistentes".into(),
                None,
                Route::AdminDashboard,
            )),
            Route::FestivalDetails { id_festival } => Some(spec(
                "Detalles del festival",
                format!("/promotor/festivales/{}/tipos-entrada", id_festival),
                Some(*id_festival),
                Route::PromoterDashboard,
            )),
            _ => None,
        }
    }
}

/// Tabla genérica a partir de una respuesta JSON
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Acepta un array de objetos o un objeto que envuelve uno
    /// (`{"content": [...]}`). Columnas en orden de aparición
    /// (`serde_json` con `preserve_order`).
    pub fn from_json(value: &Value) -> Table {
        let items: &[Value] = match value {
            Value::Array(items) => items,
            Value::Object(map) => match map.values().find_map(Value::as_array) {
                Some(items) => items,
                None => std::slice::from_ref(value),
            },
            _ => return Table::default(),
        };

        let mut columns: Vec<String> = Vec::new();
        for item in items {
            if let Value::Object(map) = item {
                for key in map.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
        }

        if columns.is_empty() {
            return Table {
                columns: vec!["valor".to_string()],
                rows: items.iter().map(|item| vec![cell_text(item)]).collect(),
            };
        }

        let rows = items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|column| item.get(column).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Table { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Sí".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_routes_map_to_endpoints() {
        let clients = ListingSpec::for_route(&Route::AdminClients).unwrap();
        assert_eq!(clients.endpoint, "/admin/clientes?tab=asistentes");
        assert_eq!(clients.festival_header, None);

        let details = ListingSpec::for_route(&Route::FestivalDetails { id_festival: 9 }).unwrap();
        assert_eq!(details.endpoint, "/promotor/festivales/9/tipos-entrada");
        assert_eq!(details.festival_header, Some(9));
        assert_eq!(details.back, Route::PromoterDashboard);
    }

    #[test]
    fn screens_with_actions_have_no_listing() {
        for route in [
            Route::Login,
            Route::FestivalEdit { id_festival: 1 },
            Route::FestivalTicketTypes { id_festival: 1 },
            Route::FestivalTicketReport { id_festival: 1 },
            Route::AdminUsers,
            Route::AdminFestivals,
            Route::AdminReports,
        ] {
            assert_eq!(ListingSpec::for_route(&route), None, "{:?}", route);
        }
    }

    #[test]
    fn columns_keep_backend_order() {
        let table = Table::from_json(&json!([
            {"nombre": "Ana", "email": "ana@example.com", "activo": true},
            {"nombre": "Luis", "telefono": "600", "activo": false}
        ]));
        assert_eq!(table.columns, vec!["nombre", "email", "activo", "telefono"]);
        assert_eq!(table.rows[1], vec!["Luis", "", "No", "600"]);
    }

    #[test]
    fn array_of_objects_becomes_table() {
        let table = Table::from_json(&json!([
            {"nombre": "Ana", "activo": true},
            {"nombre": "Luis", "email": "luis@example.com", "activo": false}
        ]));
        assert_eq!(table.columns.len(), 3);
        let email = table.columns.iter().position(|c| c == "email").unwrap();
        assert_eq!(table.rows[0][email], "");
        assert_eq!(table.rows[1][email], "luis@example.com");
        let activo = table.columns.iter().position(|c| c == "activo").unwrap();
        assert_eq!(table.rows[0][activo], "Sí");
    }

    #[test]
    fn wrapped_and_scalar_responses() {
        let wrapped = Table::from_json(&json!({"content": [{"id": 1}], "total": 1}));
        assert_eq!(wrapped.columns, vec!["id"]);
        assert_eq!(wrapped.rows, vec![vec!["1".to_string()]]);

        let scalars = Table::from_json(&json!(["VIP", "General"]));
        assert_eq!(scalars.columns, vec!["valor"]);
        assert_eq!(scalars.rows.len(), 2);

        assert!(Table::from_json(&json!(null)).is_empty());
    }
}
