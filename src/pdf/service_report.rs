use chrono::{DateTime, Utc};

use crate::errors::InternalError;
use crate::pdf::layout::{CONTENT_WIDTH, Canvas, MARGIN, PAGE_HEIGHT, text_width, truncate, wrap};
use crate::stores::ReporteCompleto;
use crate::types::catalog::{self, ClaseMantenimiento};
use crate::types::db::{equipo, repuesto, tipo_mantenimiento, usuario, usuario_responsable};

const HEADER_LINES: [&str; 4] = [
    "REPUBLICA DE COLOMBIA",
    "ALCALDIA DISTRITAL DE TUMACO",
    "SECRETARIA GENERAL",
    "OFICINA DE SISTEMAS",
];
const NIT: &str = "NIT. 891.200.916-2";
const FOOTER_LINES: [&str; 4] = [
    "Calle 11 con Carrera 9a esquina - Edificio Municipal, Telefax (2) 727 12 01",
    "Pagina Web: www.tumaco-narino.gov.co",
    "Correo electronico: contactenos@tumaco-narino.gov.co",
    "Tumaco - Narino",
];

const HALF: f32 = CONTENT_WIDTH / 2.0;
const GRID_ROW: f32 = 8.0;
const CHECKBOX: f32 = 4.0;
const CHECK_COLUMNS: [f32; 4] = [0.0, 55.0, 95.0, 140.0];
const TEXT_BOX: f32 = 25.0;
const PART_ROW: f32 = 8.0;
const PART_COLUMNS: [f32; 3] = [25.0, 50.0, CONTENT_WIDTH - 75.0];
const MIN_PART_ROWS: usize = 5;
const PART_DESCRIPTION_MAX: usize = 55;
const SIGNATURE_ROW: f32 = 7.0;
const SIGNATURE_BOX: f32 = 20.0;
const SIGNATURES_HEIGHT: f32 = SIGNATURE_ROW * 5.0 + SIGNATURE_BOX;
const FOOTER_TOP: f32 = PAGE_HEIGHT - 35.0;
/// Body content must end above this line to stay clear of the footer
const CONTENT_BOTTOM: f32 = FOOTER_TOP - 4.0;

/// Everything the service report form shows
pub struct ServiceReportData<'a> {
    pub reporte: &'a ReporteCompleto,
    pub equipo: Option<&'a equipo::Model>,
    pub responsable: Option<&'a usuario_responsable::Model>,
    /// System user requesting the document, signs for the IT office
    pub tecnico: &'a usuario::Model,
}

pub fn file_name(reporte_id: i32) -> String {
    format!("reporte_servicio_{}.pdf", reporte_id)
}

/// Render the service report form
///
/// Two pages, plus continuation pages when the spare parts table or the
/// signature block do not fit above the footer.
pub fn render_service_report(data: &ServiceReportData<'_>) -> Result<Vec<u8>, InternalError> {
    let mut canvas = Canvas::new(&format!("Reporte de servicio {}", data.reporte.reporte.id))?;
    draw_body(&mut canvas, data);
    draw_footers(&mut canvas);
    canvas.into_bytes()
}

fn draw_body(canvas: &mut Canvas, data: &ServiceReportData<'_>) {
    let y = draw_header(canvas, "REPORTE DE SERVICIO TECNICO");
    let y = draw_general_data(canvas, y, data);
    let y = draw_work_done(canvas, y, data.reporte.tipos_mantenimiento.first());
    let reporte = &data.reporte.reporte;
    let y = draw_text_box(
        canvas,
        y,
        "DIAGNOSTICO Y/O FALLA REPORTADA:",
        reporte.diagnostico_falla.as_deref().unwrap_or(""),
    );
    let y = draw_text_box(canvas, y, "ACTIVIDAD REALIZADA:", &reporte.actividad_realizada);
    draw_text_box(
        canvas,
        y,
        "OBSERVACIONES:",
        reporte.observaciones.as_deref().unwrap_or(""),
    );

    canvas.add_page();
    let y = draw_header(canvas, "REPUESTOS EMPLEADOS Y/O REEMPLAZADO");
    let y = draw_parts_table(canvas, y, &data.reporte.repuestos);
    let y = ensure_room(canvas, y + 10.0, SIGNATURES_HEIGHT);
    draw_signatures(canvas, y, data.responsable, data.tecnico);
}

/// `y` when `height` fits above the footer, otherwise the top of a new page
fn ensure_room(canvas: &mut Canvas, y: f32, height: f32) -> f32 {
    if y + height <= CONTENT_BOTTOM {
        return y;
    }
    canvas.add_page();
    MARGIN
}

fn draw_header(canvas: &mut Canvas, title: &str) -> f32 {
    let mut y = MARGIN;
    for line in HEADER_LINES {
        canvas.text_centered(MARGIN, CONTENT_WIDTH, y, 11.0, true, line);
        y += 5.0;
    }
    canvas.text_centered(MARGIN, CONTENT_WIDTH, y, 9.0, false, NIT);
    y += 10.0;
    canvas.text_centered(MARGIN, CONTENT_WIDTH, y, 12.0, true, title);
    y + 10.0
}

fn draw_general_data(canvas: &mut Canvas, mut y: f32, data: &ServiceReportData<'_>) -> f32 {
    let reporte = &data.reporte.reporte;
    let equipo = data.equipo;

    let rows = [
        (
            ("FECHA INICIO:", format_date(Some(reporte.fecha_inicio))),
            ("FECHA FINALIZACION:", format_date(reporte.fecha_finalizacion)),
        ),
        (
            ("DEPENDENCIA:", reporte.dependencia.clone()),
            ("UBICACION:", reporte.ubicacion.clone()),
        ),
        (
            (
                "EQUIPO:",
                equipo
                    .and_then(|e| e.tipo_dispositivo.as_ref())
                    .map(catalog::label)
                    .unwrap_or_default(),
            ),
            ("MARCA:", equipo.map(|e| e.marca.clone()).unwrap_or_default()),
        ),
        (
            (
                "MODELO:",
                equipo.and_then(|e| e.modelo.clone()).unwrap_or_default(),
            ),
            ("SERIE:", equipo.map(|e| e.serial.clone()).unwrap_or_default()),
        ),
    ];

    for (left, right) in rows {
        grid_cell(canvas, MARGIN, y, left.0, &left.1);
        grid_cell(canvas, MARGIN + HALF, y, right.0, &right.1);
        y += GRID_ROW;
    }
    y + 6.0
}

fn grid_cell(canvas: &mut Canvas, x: f32, y: f32, label: &str, value: &str) {
    canvas.rect(x, y, HALF, GRID_ROW);
    canvas.text(x + 2.0, y + 2.5, 9.0, true, label);
    let label_width = text_width(label, 9.0, true) + 4.0;
    canvas.text(x + label_width, y + 2.5, 9.0, false, &truncate(value, 40));
}

fn draw_work_done(
    canvas: &mut Canvas,
    y: f32,
    tipo: Option<&tipo_mantenimiento::Model>,
) -> f32 {
    canvas.rect(MARGIN, y, CONTENT_WIDTH, GRID_ROW);
    canvas.text_centered(MARGIN, CONTENT_WIDTH, y + 2.5, 10.0, true, "TRABAJO REALIZADO");

    let flag = |f: fn(&tipo_mantenimiento::Model) -> bool| tipo.map(f).unwrap_or(false);
    let preventivo = tipo.map(|t| t.tipo == ClaseMantenimiento::Preventivo).unwrap_or(false);
    let correctivo = tipo.map(|t| t.tipo == ClaseMantenimiento::Correctivo).unwrap_or(false);
    let otro_detalle = tipo
        .and_then(|t| t.descripcion_otro.clone())
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "____________________".to_string());

    let first = y + GRID_ROW + 4.0;
    check_row(
        canvas,
        first,
        [
            ("MANTENIMIENTO PREVENTIVO", preventivo),
            ("REVISION", flag(|t| t.revision)),
            ("INSTALACION", flag(|t| t.instalacion)),
            ("CONFIGURACION:", flag(|t| t.configuracion)),
        ],
    );

    let second = first + 8.0;
    let otro = format!("OTRO: {}", otro_detalle);
    check_row(
        canvas,
        second,
        [
            ("MANTENIMIENTO CORRECTIVO", correctivo),
            ("INGRESO", flag(|t| t.ingreso)),
            ("SALIDA", flag(|t| t.salida)),
            (otro.as_str(), flag(|t| t.otro)),
        ],
    );

    let third = second + 8.0;
    check_box_with_label(canvas, MARGIN, third, "CONCEPTO DE BAJA", flag(|t| t.concepto_baja));

    third + 12.0
}

fn check_row(canvas: &mut Canvas, y: f32, items: [(&str, bool); 4]) {
    for (offset, (label, checked)) in CHECK_COLUMNS.iter().zip(items) {
        check_box_with_label(canvas, MARGIN + offset, y, label, checked);
    }
}

fn check_box_with_label(canvas: &mut Canvas, x: f32, y: f32, label: &str, checked: bool) {
    canvas.checkbox(x, y, CHECKBOX, checked);
    canvas.text(x + CHECKBOX + 1.5, y + 0.8, 8.0, false, label);
}

fn draw_text_box(canvas: &mut Canvas, y: f32, label: &str, content: &str) -> f32 {
    canvas.text(MARGIN, y + 1.5, 9.0, true, label);
    let top = y + 6.0;
    canvas.rect(MARGIN, top, CONTENT_WIDTH, TEXT_BOX);

    let line_height = 4.0;
    let max_lines = ((TEXT_BOX - 2.0) / line_height) as usize;
    for (i, line) in wrap(content, 100).into_iter().take(max_lines).enumerate() {
        canvas.text(MARGIN + 2.0, top + 2.0 + i as f32 * line_height, 9.0, false, &line);
    }
    top + TEXT_BOX + 5.0
}

/// Comma-joined description of a spare part for its table cell
pub fn part_description(repuesto: &repuesto::Model) -> String {
    let joined = [
        repuesto.marca.as_deref(),
        repuesto.tecnologia.as_deref(),
        repuesto.capacidad.as_deref(),
        Some(repuesto.descripcion.as_str()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
    truncate(&joined, PART_DESCRIPTION_MAX)
}

const PART_HEADERS: [&str; 3] = [
    "CANTIDAD",
    "SERIAL O NUMERO DE PARTE",
    "MARCA, TECNOLOGIA, CAPACIDAD, DESCRIPCION",
];

/// Spare parts table; rows that would reach the footer continue on a new page
/// under repeated column headers
fn draw_parts_table(canvas: &mut Canvas, mut y: f32, repuestos: &[repuesto::Model]) -> f32 {
    table_row(canvas, y, PART_HEADERS.map(String::from), true);
    y += PART_ROW;

    let rows = repuestos.len().max(MIN_PART_ROWS);
    for i in 0..rows {
        if y + PART_ROW > CONTENT_BOTTOM {
            canvas.add_page();
            y = MARGIN;
            table_row(canvas, y, PART_HEADERS.map(String::from), true);
            y += PART_ROW;
        }
        let cells = match repuestos.get(i) {
            Some(r) => [
                r.cantidad.to_string(),
                truncate(&r.serial_numero_parte, 25),
                part_description(r),
            ],
            None => [String::new(), String::new(), String::new()],
        };
        table_row(canvas, y, cells, false);
        y += PART_ROW;
    }
    y
}

fn table_row(canvas: &mut Canvas, y: f32, cells: [String; 3], header: bool) {
    let mut x = MARGIN;
    for (width, cell) in PART_COLUMNS.iter().zip(cells) {
        canvas.rect(x, y, *width, PART_ROW);
        if header {
            canvas.text_centered(x, *width, y + 2.8, 8.0, true, &cell);
        } else {
            canvas.text(x + 2.0, y + 2.5, 9.0, false, &cell);
        }
        x += width;
    }
}

fn draw_signatures(
    canvas: &mut Canvas,
    mut y: f32,
    responsable: Option<&usuario_responsable::Model>,
    tecnico: &usuario::Model,
) {
    let servicio = [
        responsable.map(|r| r.nombres_apellidos.clone()).unwrap_or_default(),
        responsable
            .and_then(|r| r.tipo_vinculacion.as_ref())
            .map(catalog::label)
            .unwrap_or_default(),
        responsable.map(|r| r.cedula.clone()).unwrap_or_default(),
    ];
    let sistemas = [
        tecnico.nombre_completo(),
        catalog::label(&tecnico.rol).to_uppercase(),
        tecnico.cedula.clone().unwrap_or_default(),
    ];
    let left = MARGIN;
    let right = MARGIN + HALF;

    for (x, title) in [
        (left, "FUNCIONARIO Y/O CONTRATISTA DEL SERVICIO"),
        (right, "FUNCIONARIO Y/O CONTRATISTA DE SISTEMAS"),
    ] {
        canvas.rect(x, y, HALF, SIGNATURE_ROW);
        canvas.text_centered(x, HALF, y + 2.0, 8.0, true, title);
    }
    y += SIGNATURE_ROW;

    for (index, label) in ["NOMBRE:", "CARGO:"].into_iter().enumerate() {
        grid_signature_cell(canvas, left, y, label, &servicio[index]);
        grid_signature_cell(canvas, right, y, label, &sistemas[index]);
        y += SIGNATURE_ROW;
    }

    canvas.rect(left, y, HALF, SIGNATURE_BOX);
    canvas.rect(right, y, HALF, SIGNATURE_BOX);
    y += SIGNATURE_BOX;

    for x in [left, right] {
        canvas.text_centered(x, HALF, y + 1.5, 8.0, true, "FIRMA");
    }
    y += SIGNATURE_ROW;

    grid_signature_cell(canvas, left, y, "C.C:", &servicio[2]);
    grid_signature_cell(canvas, right, y, "C.C:", &sistemas[2]);
}

fn grid_signature_cell(canvas: &mut Canvas, x: f32, y: f32, label: &str, value: &str) {
    canvas.rect(x, y, HALF, SIGNATURE_ROW);
    canvas.text(x + 2.0, y + 2.0, 8.0, true, label);
    canvas.text(x + 18.0, y + 2.0, 8.0, false, &truncate(value, 45));
}

fn draw_footers(canvas: &mut Canvas) {
    for page in 0..canvas.page_count() {
        canvas.select_page(page);
        draw_footer(canvas);
    }
}

fn draw_footer(canvas: &mut Canvas) {
    let mut y = FOOTER_TOP;
    for line in FOOTER_LINES {
        canvas.text_centered(MARGIN, CONTENT_WIDTH, y, 7.0, false, line);
        y += 4.0;
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()
}
