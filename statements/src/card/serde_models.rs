use serde::Deserialize;

/// Raw serde mapping of the card movement payload. Names mirror the
/// wire format; everything the export pipeline does not need is left
/// out and ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ItaulinkFile {
    /// `itaulink_msg` envelope
    pub itaulink_msg: ItaulinkMsg,
}

#[derive(Debug, Deserialize)]
pub struct ItaulinkMsg {
    pub data: MsgData,
}

#[derive(Debug, Deserialize)]
pub struct MsgData {
    pub datos: Datos,
}

#[derive(Debug, Deserialize)]
pub struct Datos {
    #[serde(rename = "datosMovimientos")]
    pub datos_movimientos: DatosMovimientos,
}

#[derive(Debug, Deserialize)]
pub struct DatosMovimientos {
    /// all movements of the selected statement period, both currencies
    pub movimientos: Vec<Movimiento>,
}

/// One raw card movement.
#[derive(Debug, Clone, Deserialize)]
pub struct Movimiento {
    /// currency label, e.g. "Pesos" or "Dolares"
    pub moneda: String,

    /// structured movement date
    pub fecha: Fecha,

    /// merchant amount in major units, charges positive
    pub importe: f64,

    /// merchant description
    #[serde(rename = "nombreComercio")]
    pub nombre_comercio: String,

    /// movement-type tag, e.g. "Compra" or "Plan Pagos"
    pub tipo: String,

    /// installment position, present only for "Plan Pagos"
    #[serde(rename = "nroCuota")]
    pub nro_cuota: Option<u32>,

    /// total installments of the plan, present only for "Plan Pagos"
    #[serde(rename = "cantCuotas")]
    pub cant_cuotas: Option<u32>,
}

/// Structured movement date as the payload carries it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Fecha {
    pub year: i32,

    #[serde(rename = "monthOfYear")]
    pub month_of_year: u32,

    #[serde(rename = "dayOfMonth")]
    pub day_of_month: u32,
}
