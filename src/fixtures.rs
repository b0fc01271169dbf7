// src/fixtures.rs
//! Builds small single-page PDFs for tests that go through the real parser.

/// Left edge of each table column, in points.
const COLUMN_X: [u32; 3] = [72, 200, 340];
const FIRST_ROW_Y: u32 = 700;
const ROW_STEP: u32 = 24;

/// A one-page PDF whose only content is `rows` laid out as a grid of
/// Helvetica text, one text object per cell.
pub fn table_pdf(rows: &[[&str; 3]]) -> Vec<u8> {
    let mut content = String::new();
    for (r, row) in rows.iter().enumerate() {
        let y = FIRST_ROW_Y - ROW_STEP * r as u32;
        for (cell, x) in row.iter().zip(COLUMN_X) {
            content.push_str(&format!("BT /F1 12 Tf {} {} Td ({}) Tj ET\n", x, y, cell));
        }
    }

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_at = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    ));

    pdf.into_bytes()
}

/// Header row, two domains, one IP literal and a trailing domain.
pub const DOMAIN_TABLE: [[&str; 3]; 5] = [
    ["ID", "Name", "Domain"],
    ["1", "alpha", "ads.example.com"],
    ["2", "beta", "10.0.0.5"],
    ["3", "gamma", "tracker.test.net"],
    ["4", "delta", "evil.org"],
];
