use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod auth {
    use super::*;

    /// Login request. Field names are PascalCase on the wire, matching the
    /// clients this API grew up with.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct LoginRequest {
        pub nombre_usuario: String,
        pub contrasena: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct LoginResponse {
        pub token: String,
        /// Expiry instant of the token, RFC 3339.
        pub expiracion: DateTime<FixedOffset>,
        pub nombre: String,
        pub rol: String,
    }
}

pub mod fondo {
    use super::*;

    /// A fund, as request body and response alike.
    ///
    /// On create the `id` is ignored; on replace it must match the path.
    /// `tipoFondoNombre` is filled by reads and ignored on writes.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Fondo {
        #[serde(default)]
        pub id: i32,
        pub nro_cuenta: String,
        pub nombre_fondo: String,
        pub tipo_fondo_id: i32,
        pub saldo: Decimal,
        pub descripcion: Option<String>,
        pub activo: bool,
        #[serde(default)]
        pub tipo_fondo_nombre: Option<String>,
    }
}

pub mod deposito {
    use super::*;

    /// Deposit payload. The id always comes from the path.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DepositoNew {
        pub fecha_deposito: DateTime<FixedOffset>,
        pub id_fondo: i32,
        pub monto: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Deposito {
        pub id_deposito: i32,
        pub fecha_deposito: DateTime<FixedOffset>,
        pub id_fondo: i32,
        pub monto: Decimal,
    }

    /// One row of the deposit listing joined with its fund name.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DepositoDetalle {
        pub id_deposito: i32,
        pub fecha_deposito: DateTime<FixedOffset>,
        pub nombre_fondo: String,
        pub monto: Decimal,
    }
}

pub mod gasto {
    use super::*;

    /// An expense header, as request body and response alike.
    ///
    /// `nombreFondo` is filled by reads and ignored on writes.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GastoEncabezado {
        #[serde(default)]
        pub id: i32,
        pub fecha: DateTime<FixedOffset>,
        pub fondo_id: i32,
        pub observaciones: Option<String>,
        pub nombre_comercio: String,
        pub tipo_documento: String,
        pub total: Decimal,
        #[serde(default)]
        pub nombre_fondo: Option<String>,
    }

    /// An expense detail line, as request body and response alike.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GastoDetalle {
        #[serde(default)]
        pub id: i32,
        pub gasto_encabezado_id: i32,
        pub tipo_gasto_id: i32,
        pub monto: Decimal,
    }

    /// One row of the itemized expense report. `fecha` is pre-formatted as
    /// `YYYY-MM-DD` and `monto` with two decimals; `numero` is the 1-based
    /// position in the listing.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DatoDetalle {
        pub numero: usize,
        pub fecha: String,
        pub fondo: String,
        pub tipo_gasto: String,
        pub monto: String,
    }
}

pub mod tipo_fondo {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TipoFondo {
        #[serde(default)]
        pub id: i32,
        pub nombre: String,
    }
}

pub mod tipo_gasto {
    use super::*;

    /// Request body for creating or replacing an expense type. The code is
    /// never client-supplied.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TipoGastoUpsert {
        pub nombre: String,
        pub descripcion: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TipoGasto {
        pub id: i32,
        pub codigo: String,
        pub nombre: String,
        pub descripcion: Option<String>,
    }
}

pub mod presupuesto {
    use super::*;

    /// Request body for creating or replacing a budget.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PresupuestoUpsert {
        pub tipo_gasto_id: i32,
        pub mes: u8,
        pub anio: i32,
        pub monto: Decimal,
    }

    /// A budget row as read back, with the expense-type name and the Spanish
    /// month name expanded.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Presupuesto {
        pub id: i32,
        pub tipo_gasto_id: i32,
        pub mes: u8,
        pub anio: i32,
        pub monto: Decimal,
        pub tipo_gasto_nombre: String,
        pub nombre_mes: String,
    }
}

pub mod secure {
    use super::*;

    /// Body of the authenticated smoke-test endpoint.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SecureData {
        pub mensaje: String,
    }
}
